use serde::Serialize;

use crate::dom::{ElementHandle, Page, SECTION_SELECTOR};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
    pub level: u8,
}

pub fn table_of_contents<P: Page>(page: &P) -> Vec<TocEntry> {
    page.query_selector_all(SECTION_SELECTOR)
        .iter()
        .filter_map(|section| {
            Some(TocEntry {
                id: section.id()?,
                title: section.child_text("h2")?.trim().to_string(),
                level: 2,
            })
        })
        .collect()
}
