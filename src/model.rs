//! Core data models for the game cards.
//! Catalog records are loosely typed JSON; `GameView` is the fully populated
//! display model both renderers consume.

use serde::{Deserialize, Serialize};

/// Any JSON value a catalog field may carry.
///
/// Catalog files are hand-edited, so prices show up as numbers, as
/// `"59,90"`, as `"R$ 59,90"` or as `"Grátis"`. Deserialization never fails
/// on a field; interpretation happens in [`crate::normalize`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<FieldValue>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Textual form of a scalar or list field; `None` for objects and booleans.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(FieldValue::as_text).collect();
                Some(parts.join(" "))
            }
            FieldValue::Other(_) => None,
        }
    }

    /// Text with surrounding whitespace removed, `None` when blank.
    pub fn non_blank(&self) -> Option<String> {
        self.as_text()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One catalog entry. No field is guaranteed present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRecord {
    pub id: Option<FieldValue>,
    pub titulo: Option<FieldValue>,
    pub imagem_header: Option<FieldValue>,
    pub image_header: Option<FieldValue>,
    pub image: Option<FieldValue>,
    pub alt: Option<FieldValue>,
    pub image_alt: Option<FieldValue>,
    pub pagina_loja: Option<FieldValue>,
    pub pagina: Option<FieldValue>,
    pub preco: Option<FieldValue>,
    pub preco_com_desconto: Option<FieldValue>,
    pub desconto: Option<FieldValue>,
    pub descricao_curta: Option<FieldValue>,
    pub descricao_resumida: Option<FieldValue>,
    pub descricao: Option<FieldValue>,
    pub genero: Option<FieldValue>,
}

impl GameRecord {
    /// Non-blank id of the record, if any.
    pub fn id(&self) -> Option<String> {
        self.id.as_ref().and_then(FieldValue::non_blank)
    }
}

/// Display fields derived from a [`GameRecord`], recomputed on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub alt_text: String,
    pub store_url: String,
    pub genres: Vec<String>,
    pub is_free: bool,
    pub prices_equal: bool,
    /// Formatted base price; empty when no old price is displayed.
    pub old_price: String,
    /// Final price line, always displayed.
    pub final_price: String,
    pub discount_label: Option<String>,
}

impl GameView {
    /// The struck-through price is shown only for a non-free item whose two
    /// prices actually differ.
    pub fn show_old_price(&self) -> bool {
        !self.is_free && !self.old_price.trim().is_empty() && self.old_price != self.final_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_json_shapes_never_fail_a_record() {
        let rec: GameRecord = serde_json::from_str(
            r#"{"id":"x","preco":true,"genero":["RPG","Ação"],"titulo":{"pt":"?"},"desconto":15}"#,
        )
        .unwrap();
        assert_eq!(rec.id(), Some("x".to_string()));
        assert_eq!(rec.preco, Some(FieldValue::Other(serde_json::Value::Bool(true))));
        assert_eq!(rec.desconto, Some(FieldValue::Number(15.0)));
        assert_eq!(rec.genero.unwrap().as_text(), Some("RPG Ação".to_string()));
        assert_eq!(rec.titulo.unwrap().as_text(), None);
    }

    #[test]
    fn numeric_ids_become_text() {
        let rec: GameRecord = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(rec.id(), Some("42".to_string()));
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn old_price_hidden_when_identical_to_final() {
        let view = GameView {
            old_price: "R$ 10,00".into(),
            final_price: "R$ 10,00".into(),
            ..Default::default()
        };
        assert!(!view.show_old_price());
        let view = GameView {
            old_price: "R$ 20,00".into(),
            ..view
        };
        assert!(view.show_old_price());
    }
}
