//! Price, discount and text normalization shared by both card renderers.

use crate::model::{FieldValue, GameRecord, GameView};

/// Label shown instead of a price for free items.
pub const FREE_LABEL: &str = "Grátis";

/// Lowercase substrings that mark a price string as free.
const FREE_MARKERS: [&str; 2] = ["grat", "free"];

const GENRE_SEPARATORS: [char; 5] = [',', '·', '|', '/', '\\'];

/// Parse a price in any of the catalog's representations.
///
/// `"1.234,56"` treats `.` as grouping and `,` as decimal separator; a lone
/// `,` is the decimal separator. Returns `None` when nothing parses.
pub fn parse_price(raw: &FieldValue) -> Option<f64> {
    match raw {
        FieldValue::Number(n) => n.is_finite().then_some(*n),
        FieldValue::Text(s) => parse_price_str(s),
        _ => None,
    }
}

fn parse_price_str(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let has_dot = cleaned.contains('.');
    let has_comma = cleaned.contains(',');
    let canonical = if has_dot && has_comma {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else if has_comma {
        cleaned.replacen(',', ".", 1)
    } else {
        cleaned
    };
    canonical.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Case-insensitive free marker check ("Grátis", "gratuito", "Free").
pub fn looks_free(raw: &FieldValue) -> bool {
    match raw {
        FieldValue::Text(s) => {
            let folded: String = s.to_lowercase().chars().map(fold_diacritic).collect();
            FREE_MARKERS.iter().any(|m| folded.contains(m))
        }
        _ => false,
    }
}

/// Brazilian real formatting: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// Formatted price, or the raw trimmed text when it does not parse.
pub fn display_price(raw: &FieldValue) -> String {
    match parse_price(raw) {
        Some(n) => format_brl(n),
        None => raw.as_text().map(|s| s.trim().to_string()).unwrap_or_default(),
    }
}

/// Whether a `desconto` value describes an actual (nonzero) discount.
pub fn discount_active(raw: &FieldValue) -> bool {
    match raw {
        FieldValue::Number(n) => *n > 0.0,
        FieldValue::Text(s) => digits_of(s).is_some_and(|n| n != 0),
        _ => false,
    }
}

/// Human-readable discount label: `50` -> `50%`, `"0.25"` -> `25%`,
/// `"30%"` unchanged.
pub fn format_discount(raw: &FieldValue) -> String {
    match raw {
        FieldValue::Number(n) => format!("{}%", crate::model::format_number(*n)),
        FieldValue::Text(s) => {
            let s = s.trim();
            if s.contains('%') {
                return s.to_string();
            }
            if s.contains('.') {
                if let Ok(n) = s.parse::<f64>() {
                    return format!("{}%", (n * 100.0).round() as i64);
                }
            }
            match digits_of(s) {
                Some(n) => format!("{n}%"),
                None => s.to_string(),
            }
        }
        other => other.as_text().unwrap_or_default(),
    }
}

fn digits_of(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Compare base and discounted prices: numerically at cent precision when
/// both parse, otherwise as normalized text.
pub fn prices_equal(base: &FieldValue, discounted: &FieldValue) -> bool {
    if let (Some(a), Some(b)) = (parse_price(base), parse_price(discounted)) {
        return (a * 100.0).round() as i64 == (b * 100.0).round() as i64;
    }
    match (base, discounted) {
        (FieldValue::Text(a), FieldValue::Text(b)) => normalize_price_text(a) == normalize_price_text(b),
        _ => false,
    }
}

fn normalize_price_text(s: &str) -> String {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    ["R$", "r$"]
        .iter()
        .fold(compact, |acc, marker| acc.replace(*marker, ""))
        .replace('.', "")
        .replace(',', ".")
}

/// Split a genre field into badge words.
pub fn genre_words(raw: &FieldValue) -> Vec<String> {
    let joined = raw.as_text().unwrap_or_default();
    joined
        .split(|c: char| c.is_whitespace() || GENRE_SEPARATORS.contains(&c))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Base letter of a lowercase Latin-1 or Latin Extended-A letter. Combining
/// marks left over from decomposed input are dropped later by `slugify`.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'í' | 'ì' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Id fallback for records without one: `"Ação & Aventura"` -> `acao__aventura`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.to_lowercase().chars().map(fold_diacritic) {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push('_');
            pending_space = false;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }
    while out.contains("--") {
        out = collapse_dashes(&out);
    }
    out.trim_matches('_').to_string()
}

fn collapse_dashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' && chars.peek() == Some(&'-') {
            while chars.peek() == Some(&'-') {
                chars.next();
            }
            out.push('_');
        } else {
            out.push(ch);
        }
    }
    out
}

fn first_text<'a>(fields: impl IntoIterator<Item = &'a Option<FieldValue>>) -> Option<String> {
    fields
        .into_iter()
        .flatten()
        .find_map(FieldValue::non_blank)
}

impl GameView {
    /// Build the display model for one record. Pure: the same record always
    /// yields the same view.
    pub fn from_record(rec: &GameRecord) -> Self {
        let title = first_text([&rec.titulo]).unwrap_or_default();
        let id = rec.id().unwrap_or_else(|| slugify(&title));
        let description =
            first_text([&rec.descricao_curta, &rec.descricao_resumida, &rec.descricao])
                .unwrap_or_default();
        let image = first_text([&rec.imagem_header, &rec.image_header, &rec.image]).unwrap_or_default();
        let alt_text = first_text([&rec.alt, &rec.image_alt]).unwrap_or_else(|| {
            if title.trim().is_empty() {
                "Capa do jogo".to_string()
            } else {
                format!("Capa do jogo {}", title.trim())
            }
        });
        let store_url = first_text([&rec.pagina_loja, &rec.pagina]).unwrap_or_else(|| "#".to_string());
        let genres = rec.genero.as_ref().map(genre_words).unwrap_or_default();

        let empty = FieldValue::Text(String::new());
        let base = rec.preco.as_ref().unwrap_or(&empty);
        let discounted = rec.preco_com_desconto.as_ref().unwrap_or(base);

        let free_by_number = [base, discounted]
            .iter()
            .any(|p| parse_price(p).is_some_and(|n| n == 0.0));
        let is_free = free_by_number || looks_free(base) || looks_free(discounted);
        let equal = prices_equal(base, discounted);

        let (final_price, old_price, discount_label) = if is_free {
            (FREE_LABEL.to_string(), String::new(), None)
        } else if equal {
            (display_price(discounted), String::new(), None)
        } else {
            let label = rec
                .desconto
                .as_ref()
                .filter(|d| discount_active(d))
                .map(format_discount);
            (display_price(discounted), display_price(base), label)
        };

        GameView {
            id,
            title,
            description,
            image,
            alt_text,
            store_url,
            genres,
            is_free,
            prices_equal: equal,
            old_price,
            final_price,
            discount_label,
        }
    }
}
