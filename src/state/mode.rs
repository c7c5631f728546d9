/// How a card4line block is laid out for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Grid,
    Carousel,
}

impl RenderMode {
    /// `Carousel` at or below the breakpoint, `Grid` above it.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            RenderMode::Carousel
        } else {
            RenderMode::Grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_itself_is_carousel() {
        assert_eq!(RenderMode::for_width(1024, 1024), RenderMode::Carousel);
        assert_eq!(RenderMode::for_width(1025, 1024), RenderMode::Grid);
        assert_eq!(RenderMode::for_width(320, 1024), RenderMode::Carousel);
        assert_eq!(RenderMode::for_width(0, 0), RenderMode::Carousel);
    }
}
