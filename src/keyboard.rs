use crate::dom::{ElementHandle, Page, SECTION_SELECTOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Index of the section to move to, given each section's viewport-relative top.
/// The current section is the first one starting above the viewport midpoint; when
/// none does, the reader is before the first section.
pub fn target_index(key: &str, section_tops: &[f64], viewport_height: f64) -> Option<usize> {
    let direction = Direction::from_key(key)?;
    let midpoint = viewport_height / 2.0;
    let current = section_tops.iter().position(|top| *top < midpoint);

    match (direction, current) {
        (Direction::Next, None) => (!section_tops.is_empty()).then_some(0),
        (Direction::Next, Some(index)) => {
            (index + 1 < section_tops.len()).then_some(index + 1)
        }
        (Direction::Previous, Some(index)) if index > 0 => Some(index - 1),
        (Direction::Previous, _) => None,
    }
}

/// Returns true when the key was consumed and its default should be prevented.
pub fn on_key<P: Page>(page: &P, key: &str) -> bool {
    let sections = page.query_selector_all(SECTION_SELECTOR);
    let tops: Vec<f64> = sections.iter().map(ElementHandle::viewport_top).collect();

    let Some(target) = target_index(key, &tops, page.viewport_height()) else {
        return false;
    };

    sections[target].scroll_into_view();
    true
}
