// Drag-to-scroll state for the carousel strip (mouse and touch).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragScroll {
    pub active: bool,
    pub start_x: f64,
    pub start_scroll_left: f64,
}

impl DragScroll {
    pub fn begin(&mut self, page_x: f64, scroll_left: f64) {
        self.active = true;
        self.start_x = page_x;
        self.start_scroll_left = scroll_left;
    }

    /// New `scrollLeft` for the strip, or `None` when no drag is in progress.
    pub fn drag_to(&self, page_x: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        Some(self.start_scroll_left - (page_x - self.start_x))
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_left_scrolls_right() {
        let mut drag = DragScroll::default();
        assert_eq!(drag.drag_to(10.0), None);
        drag.begin(200.0, 50.0);
        assert_eq!(drag.drag_to(150.0), Some(100.0));
        assert_eq!(drag.drag_to(260.0), Some(-10.0));
        drag.end();
        assert_eq!(drag.drag_to(0.0), None);
    }

    #[test]
    fn restarting_a_drag_resets_the_origin() {
        let mut drag = DragScroll::default();
        drag.begin(100.0, 0.0);
        drag.begin(40.0, 300.0);
        assert_eq!(drag.drag_to(40.0), Some(300.0));
    }
}
