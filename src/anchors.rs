use crate::dom::{ElementHandle, Page};

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click to the browser.
    Default,
    /// Navigation was taken over; the caller must suppress the default.
    PreventDefault,
}

/// Smooth scrolls the element with `id` to the top of the viewport.
pub fn smooth_scroll<P: Page>(page: &P, id: &str) -> bool {
    match page.element_by_id(id) {
        Some(target) => {
            target.scroll_into_view();
            true
        }
        None => false,
    }
}

/// Fragment name of an in-page link. The bare `#` is not treated as one.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

pub fn on_anchor_click<P: Page>(page: &P, href: Option<&str>) -> AnchorAction {
    let Some(fragment) = href.and_then(anchor_fragment) else {
        return AnchorAction::Default;
    };

    if !smooth_scroll(page, fragment) {
        log::debug!("anchor target #{fragment} not found");
    }

    AnchorAction::PreventDefault
}
