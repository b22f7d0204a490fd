use crate::dom::{ElementHandle, Page};

pub const BUTTON_CLASS: &str = "scroll-to-top";
const BUTTON_SELECTOR: &str = ".scroll-to-top";
const BUTTON_LABEL: &str = "⬆";
const BUTTON_ARIA_LABEL: &str = "Scroll to top";
const BUTTON_CSS: &str = "position: fixed; bottom: 2rem; right: 2rem; width: 50px; height: 50px; \
background: linear-gradient(135deg, #00d9ff, #d946ef); color: #0a0e27; border: none; \
border-radius: 50%; cursor: pointer; font-size: 1.5rem; display: none; z-index: 999; \
transition: all 0.3s ease; box-shadow: 0 5px 20px rgba(0, 217, 255, 0.3);";

/// Returns the page's scroll-to-top button, creating it on first use.
pub fn ensure_button<P: Page>(page: &P) -> Option<P::Element> {
    if let Some(existing) = page.query_selector(BUTTON_SELECTOR) {
        return Some(existing);
    }

    let button = page.create_button(BUTTON_CLASS, BUTTON_LABEL, BUTTON_CSS)?;
    button.set_attribute("aria-label", BUTTON_ARIA_LABEL);
    button.set_attribute("type", "button");
    log::debug!("created scroll-to-top button");
    Some(button)
}

pub fn is_visible_at(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn update_visibility<E: ElementHandle>(button: &E, scroll_y: f64, threshold: f64) {
    if is_visible_at(scroll_y, threshold) {
        button.set_style("display", "flex");
        button.set_style("align-items", "center");
        button.set_style("justify-content", "center");
    } else {
        button.set_style("display", "none");
    }
}

pub fn on_click<P: Page>(page: &P) {
    page.scroll_to_top();
}
