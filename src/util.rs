// Small helpers shared by the renderers: console logging, debouncing, CSS escaping.

use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use log::Level;

/// Route `log` records to the browser console. Starts at `Info`; callers
/// narrow it with `log::set_max_level` once the page config is read.
pub fn init_logging() {
    // A second call fails with "logger already set"; the first one wins.
    let _ = console_log::init_with_level(Level::Info);
}

/// Cancel-and-restart timer: only the last call within the delay runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule<F: FnOnce() + 'static>(&self, f: F) {
        // Dropping a gloo Timeout clears it.
        let timeout = Timeout::new(self.delay_ms, f);
        self.pending.replace(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.replace(None);
    }
}

/// Escape an image URL for `url('...')` inside a style value. Quotes get a
/// backslash and newlines are dropped; no HTML escaping.
pub fn escape_css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => {}
            other => out.push(other),
        }
    }
    out
}

/// Row gap for a card4line block, tighter as the block holds more slots.
pub fn row_gap_for(slot_count: usize) -> &'static str {
    match slot_count {
        0..=4 => "25px",
        5..=8 => "20px",
        9..=12 => "12px",
        _ => "10px",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_url_escaping() {
        assert_eq!(escape_css_url("img/a.png"), "img/a.png");
        assert_eq!(escape_css_url("it's\n\"x\".png"), "it\\'s\\\"x\\\".png");
        assert_eq!(escape_css_url("a&b<c>.png"), "a&b<c>.png");
    }

    #[test]
    fn row_gap_bands() {
        assert_eq!(row_gap_for(0), "25px");
        assert_eq!(row_gap_for(4), "25px");
        assert_eq!(row_gap_for(5), "20px");
        assert_eq!(row_gap_for(8), "20px");
        assert_eq!(row_gap_for(9), "12px");
        assert_eq!(row_gap_for(12), "12px");
        assert_eq!(row_gap_for(13), "10px");
    }
}
