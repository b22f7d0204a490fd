//! Narrow capability traits over the page. Everything that reacts to user input is
//! written against these so it can run on the host with the in-memory `fake::FakePage`.

/// Content sections used by the highlighter, keyboard navigation and the table of contents.
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// A handle to one element of the page.
pub trait ElementHandle: Clone + PartialEq {
    fn id(&self) -> Option<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;

    /// Sets an inline style property using its CSS name (`box-shadow`, not `boxShadow`).
    fn set_style(&self, property: &str, value: &str);
    fn style(&self, property: &str) -> Option<String>;

    /// True when `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
    /// Text of the first descendant matching `selector`.
    fn child_text(&self, selector: &str) -> Option<String>;

    /// Distance from the top of the document.
    fn offset_top(&self) -> f64;
    /// Distance from the top of the viewport; negative once scrolled past.
    fn viewport_top(&self) -> f64;
    /// Smooth scroll bringing this element's top edge to the viewport's top edge.
    fn scroll_into_view(&self);
}

/// Document and window level capabilities.
pub trait Page {
    type Element: ElementHandle;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to_top(&self);

    /// Appends a `<button>` to the body.
    fn create_button(&self, class: &str, label: &str, css: &str) -> Option<Self::Element>;
    /// Appends a `<style>` element to the head.
    fn append_style_sheet(&self, css: &str, media: Option<&str>);
}
