use crate::{
    config::SiteConfig,
    dom::{ElementHandle, Page, NAV_LINK_SELECTOR, SECTION_SELECTOR},
    fade,
    scroll_top,
};

const NAVBAR_SELECTOR: &str = ".navbar";
const SHADOW_SCROLLED: &str = "0 8px 32px rgba(0, 217, 255, 0.2)";
const SHADOW_RESTING: &str = "0 8px 32px rgba(0, 217, 255, 0.1)";
const ACTIVE_LINK_CLASS: &str = "active-section";
const ACTIVE_LINK_BORDER: &str = "2px solid var(--accent-cyan)";

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > 0.0 {
        SHADOW_SCROLLED
    } else {
        SHADOW_RESTING
    }
}

pub fn apply_navbar_shadow<P: Page>(page: &P, scroll_y: f64) {
    if let Some(navbar) = page.query_selector(NAVBAR_SELECTOR) {
        navbar.set_style("box-shadow", navbar_shadow(scroll_y));
    }
}

/// Id of the last section (in document order) whose top, pulled up by `lookahead`,
/// has been reached.
pub fn current_section<P: Page>(page: &P, scroll_y: f64, lookahead: f64) -> Option<String> {
    page.query_selector_all(SECTION_SELECTOR)
        .iter()
        .filter(|section| scroll_y >= section.offset_top() - lookahead)
        .filter_map(ElementHandle::id)
        .last()
}

pub fn highlight_nav_links<P: Page>(page: &P, current: Option<&str>) {
    let active_href = current.map(|id| format!("#{id}"));

    for link in page.query_selector_all(NAV_LINK_SELECTOR) {
        let is_active =
            active_href.is_some() && link.attribute("href").as_deref() == active_href.as_deref();

        if is_active {
            link.add_class(ACTIVE_LINK_CLASS);
            link.set_style("border-bottom", ACTIVE_LINK_BORDER);
        } else {
            link.remove_class(ACTIVE_LINK_CLASS);
            link.set_style("border-bottom", "none");
        }
    }
}

/// The one place scroll-driven effects run. The frontend calls [`on_scroll`] for every
/// scroll event and [`on_settle`] once scrolling has been quiet for the configured delay.
///
/// [`on_scroll`]: ScrollDispatcher::on_scroll
/// [`on_settle`]: ScrollDispatcher::on_settle
pub struct ScrollDispatcher<E: ElementHandle> {
    config: SiteConfig,
    scroll_top_button: Option<E>,
}

impl<E: ElementHandle> ScrollDispatcher<E> {
    pub fn new(config: SiteConfig, scroll_top_button: Option<E>) -> Self {
        Self {
            config,
            scroll_top_button,
        }
    }

    /// Returns cards that still need to be handed to the intersection watcher.
    pub fn on_scroll<P: Page<Element = E>>(&self, page: &P) -> Vec<E> {
        let scroll_y = page.scroll_y();

        apply_navbar_shadow(page, scroll_y);
        self.refresh_active_section(page, scroll_y);

        if let Some(button) = self.scroll_top_button.as_ref() {
            scroll_top::update_visibility(button, scroll_y, self.config.scroll_top_threshold_px);
        }

        fade::register_pending(page)
    }

    pub fn on_settle<P: Page<Element = E>>(&self, page: &P) -> Vec<E> {
        let scroll_y = page.scroll_y();
        self.refresh_active_section(page, scroll_y);
        log::debug!("scroll settled at {scroll_y:.0}px");
        fade::register_pending(page)
    }

    fn refresh_active_section<P: Page<Element = E>>(&self, page: &P, scroll_y: f64) {
        let current = current_section(page, scroll_y, self.config.section_lookahead_px);
        highlight_nav_links(page, current.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};

    struct Landing {
        page: FakePage,
        navbar: FakeElement,
        links: Vec<FakeElement>,
    }

    fn landing() -> Landing {
        let page = FakePage::new();
        let navbar = page.add(NAVBAR_SELECTOR, FakeElement::new().with_class("navbar"));

        let mut links = Vec::new();
        for (id, top) in [("hero", 0.0), ("story", 900.0), ("venue", 1800.0)] {
            page.add(SECTION_SELECTOR, FakeElement::new().with_id(id).at_offset(top));
            links.push(page.add(
                NAV_LINK_SELECTOR,
                FakeElement::new()
                    .with_class("nav-link")
                    .with_attribute("href", &format!("#{id}")),
            ));
        }

        Landing { page, navbar, links }
    }

    fn active_links(links: &[FakeElement]) -> Vec<String> {
        links
            .iter()
            .filter(|link| link.has_class("active-section"))
            .filter_map(|link| link.attribute("href"))
            .collect()
    }

    #[test]
    fn shadow_strengthens_once_scrolled() {
        assert_eq!(navbar_shadow(0.0), "0 8px 32px rgba(0, 217, 255, 0.1)");
        assert_eq!(navbar_shadow(-4.0), "0 8px 32px rgba(0, 217, 255, 0.1)");
        assert_eq!(navbar_shadow(1.0), "0 8px 32px rgba(0, 217, 255, 0.2)");
    }

    #[test]
    fn missing_navbar_is_ignored() {
        let page = FakePage::new();
        apply_navbar_shadow(&page, 50.0);
    }

    #[test]
    fn section_lookahead_activates_early() {
        let Landing { page, .. } = landing();

        assert_eq!(current_section(&page, 0.0, 100.0).as_deref(), Some("hero"));
        assert_eq!(current_section(&page, 799.0, 100.0).as_deref(), Some("hero"));
        assert_eq!(current_section(&page, 800.0, 100.0).as_deref(), Some("story"));
        assert_eq!(current_section(&page, 5000.0, 100.0).as_deref(), Some("venue"));
    }

    #[test]
    fn exactly_one_link_is_highlighted() {
        let Landing { page, links, .. } = landing();

        for (scroll_y, expected) in [(0.0, "#hero"), (850.0, "#story"), (1750.0, "#venue"), (20.0, "#hero")] {
            highlight_nav_links(&page, current_section(&page, scroll_y, 100.0).as_deref());
            assert_eq!(active_links(&links), vec![expected.to_string()]);
        }

        let active = links
            .iter()
            .find(|link| link.has_class("active-section"))
            .expect("one link active");
        assert_eq!(
            active.style("border-bottom").as_deref(),
            Some("2px solid var(--accent-cyan)")
        );
        assert_eq!(links[1].style("border-bottom").as_deref(), Some("none"));
    }

    #[test]
    fn no_current_section_clears_every_link() {
        let Landing { page, links, .. } = landing();
        highlight_nav_links(&page, Some("story"));

        highlight_nav_links(&page, None);

        assert!(active_links(&links).is_empty());
    }

    #[test]
    fn dispatcher_runs_every_effect_in_one_pass() {
        let Landing { page, navbar, links } = landing();
        let button = crate::scroll_top::ensure_button(&page).expect("button");
        let card = page.add(fade::CARD_SELECTOR, FakeElement::new().with_class("tile"));
        let dispatcher = ScrollDispatcher::new(SiteConfig::default(), Some(button.clone()));

        page.set_scroll_y(950.0);
        let pending = dispatcher.on_scroll(&page);

        assert_eq!(navbar.style("box-shadow").as_deref(), Some(SHADOW_SCROLLED));
        assert_eq!(active_links(&links), vec!["#story".to_string()]);
        assert_eq!(button.style("display").as_deref(), Some("flex"));
        assert_eq!(pending, vec![card]);

        page.set_scroll_y(0.0);
        assert!(dispatcher.on_scroll(&page).is_empty());
        assert_eq!(navbar.style("box-shadow").as_deref(), Some(SHADOW_RESTING));
        assert_eq!(button.style("display").as_deref(), Some("none"));
    }

    #[test]
    fn settle_pass_only_touches_sections_and_cards() {
        let Landing { page, navbar, links } = landing();
        let dispatcher = ScrollDispatcher::<FakeElement>::new(SiteConfig::default(), None);

        page.set_scroll_y(1900.0);
        dispatcher.on_settle(&page);

        assert_eq!(navbar.style("box-shadow"), None);
        assert_eq!(active_links(&links), vec!["#venue".to_string()]);
    }
}
