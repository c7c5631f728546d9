use gloo::events::EventListener;
use web_sys::Element;

/// Mobile menu: the trigger opens the panel, the close control closes it.
/// The only state is the open class on the panel.
pub struct HamburgerMenu {
    open: EventListener,
    close: EventListener,
}

impl HamburgerMenu {
    pub fn attach(trigger: &Element, panel: Element, close: &Element, open_class: &str) -> Self {
        let open = {
            let panel = panel.clone();
            let class = open_class.to_string();
            EventListener::new(trigger, "click", move |_| {
                let _ = panel.class_list().add_1(&class);
            })
        };
        let close = {
            let class = open_class.to_string();
            EventListener::new(close, "click", move |_| {
                let _ = panel.class_list().remove_1(&class);
            })
        };
        Self { open, close }
    }

    /// Keep the listeners for the lifetime of the page.
    pub fn forget(self) {
        self.open.forget();
        self.close.forget();
    }
}
