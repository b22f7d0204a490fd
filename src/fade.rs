use crate::dom::{ElementHandle, Page};

pub const CARD_SELECTOR: &str = ".content-card, .tile";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";

const STATE_ATTRIBUTE: &str = "data-fade-in";
const PENDING: &str = "pending";
const SHOWN: &str = "shown";
const ENTRANCE_ANIMATION: &str = "slideInUp 0.6s ease-out forwards";

/// Hides every card not yet handed to the intersection watcher and returns them.
/// Cards already registered are skipped, so repeated passes never observe twice.
pub fn register_pending<P: Page>(page: &P) -> Vec<P::Element> {
    page.query_selector_all(CARD_SELECTOR)
        .into_iter()
        .filter(|card| card.attribute(STATE_ATTRIBUTE).is_none())
        .inspect(|card| {
            card.set_style("opacity", "0");
            card.set_attribute(STATE_ATTRIBUTE, PENDING);
        })
        .collect()
}

/// Starts the entrance animation. Caller unobserves the card afterwards.
pub fn reveal<E: ElementHandle>(card: &E) {
    card.set_style("animation", ENTRANCE_ANIMATION);
    card.set_attribute(STATE_ATTRIBUTE, SHOWN);
}
