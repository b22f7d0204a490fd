use crate::dom::{ElementHandle, Page, NAV_LINK_SELECTOR};

pub const TOGGLE_ID: &str = "navToggle";
pub const MENU_ID: &str = "navMenu";
const ACTIVE_CLASS: &str = "active";

/// Mobile navigation: the toggle button and the panel it opens.
#[derive(Clone)]
pub struct MenuController<E: ElementHandle> {
    toggle: E,
    menu: E,
}

impl<E: ElementHandle> MenuController<E> {
    /// `None` when the page lacks either the toggle or the panel.
    pub fn locate<P: Page<Element = E>>(page: &P) -> Option<Self> {
        Some(Self {
            toggle: page.element_by_id(TOGGLE_ID)?,
            menu: page.element_by_id(MENU_ID)?,
        })
    }

    pub fn toggle_button(&self) -> &E {
        &self.toggle
    }

    pub fn menu(&self) -> &E {
        &self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(ACTIVE_CLASS)
    }

    pub fn toggle(&self) {
        self.menu.toggle_class(ACTIVE_CLASS);
        self.toggle.toggle_class(ACTIVE_CLASS);
    }

    pub fn close(&self) {
        self.menu.remove_class(ACTIVE_CLASS);
        self.toggle.remove_class(ACTIVE_CLASS);
    }

    /// Document-wide click. A target outside both the toggle and the panel closes the
    /// menu; so does a click with no element target at all.
    pub fn on_document_click(&self, target: Option<&E>) {
        let inside = target
            .is_some_and(|target| self.toggle.contains(target) || self.menu.contains(target));

        if !inside {
            self.close();
        }
    }
}

/// Nav links living inside the menu panel.
pub fn menu_links<P: Page>(page: &P, menu: &P::Element) -> Vec<P::Element> {
    page.query_selector_all(NAV_LINK_SELECTOR)
        .into_iter()
        .filter(|link| menu.contains(link))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};

    fn page_with_menu() -> (FakePage, FakeElement, FakeElement) {
        let page = FakePage::new();
        let toggle = page.add("#navToggle", FakeElement::new().with_id(TOGGLE_ID));
        let menu = page.add("#navMenu", FakeElement::new().with_id(MENU_ID));
        (page, toggle, menu)
    }

    #[test]
    fn missing_toggle_disables_controller() {
        let page = FakePage::new();
        page.add("#navMenu", FakeElement::new().with_id(MENU_ID));

        assert!(MenuController::locate(&page).is_none());
    }

    #[test]
    fn toggle_flips_both_elements_once_per_click() {
        let (page, toggle, menu) = page_with_menu();
        let controller = MenuController::locate(&page).expect("menu present");

        controller.toggle();
        assert!(menu.has_class("active"));
        assert!(toggle.has_class("active"));

        controller.toggle();
        assert!(!menu.has_class("active"));
        assert!(!toggle.has_class("active"));
    }

    #[test]
    fn clicks_inside_keep_menu_open() {
        let (page, toggle, menu) = page_with_menu();
        let controller = MenuController::locate(&page).expect("menu present");
        let icon = FakeElement::new().inside(&toggle);
        let item = FakeElement::new().inside(&menu);

        controller.toggle();
        controller.on_document_click(Some(&icon));
        controller.on_document_click(Some(&item));

        assert!(controller.is_open());
    }

    #[test]
    fn outside_click_closes_menu() {
        let (page, toggle, _menu) = page_with_menu();
        let controller = MenuController::locate(&page).expect("menu present");
        let elsewhere = FakeElement::new();

        controller.toggle();
        controller.on_document_click(Some(&elsewhere));

        assert!(!controller.is_open());
        assert!(!toggle.has_class("active"));

        controller.toggle();
        controller.on_document_click(None);
        assert!(!controller.is_open());
    }

    #[test]
    fn only_links_inside_the_panel_close_it() {
        let (page, _toggle, menu) = page_with_menu();
        let inner = page.add(
            NAV_LINK_SELECTOR,
            FakeElement::new().with_attribute("href", "#story").inside(&menu),
        );
        page.add(NAV_LINK_SELECTOR, FakeElement::new().with_attribute("href", "#footer"));

        let links = menu_links(&page, &menu);
        assert_eq!(links, vec![inner]);
    }

    #[test]
    fn closing_an_already_closed_menu_is_harmless() {
        let (page, toggle, menu) = page_with_menu();
        let controller = MenuController::locate(&page).expect("menu present");

        controller.close();

        assert!(!menu.has_class("active"));
        assert!(!toggle.has_class("active"));
    }
}
