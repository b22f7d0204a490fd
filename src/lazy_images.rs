use crate::dom::ElementHandle;

pub const LAZY_IMAGE_SELECTOR: &str = r#"img[loading="lazy"]"#;

/// Swaps in the deferred source once the image is near the viewport.
pub fn load<E: ElementHandle>(image: &E) {
    if let Some(source) = image.attribute("data-src").filter(|source| !source.is_empty()) {
        image.set_attribute("src", &source);
    }
    image.remove_attribute("loading");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    #[test]
    fn deferred_source_is_promoted() {
        let image = FakeElement::new()
            .with_attribute("loading", "lazy")
            .with_attribute("src", "/img/placeholder.svg")
            .with_attribute("data-src", "/img/couple.jpg");

        load(&image);

        assert_eq!(image.attribute("src").as_deref(), Some("/img/couple.jpg"));
        assert_eq!(image.attribute("loading"), None);
    }

    #[test]
    fn image_without_deferred_source_keeps_its_src() {
        let image = FakeElement::new()
            .with_attribute("loading", "lazy")
            .with_attribute("src", "/img/rings.jpg");

        load(&image);

        assert_eq!(image.attribute("src").as_deref(), Some("/img/rings.jpg"));
        assert_eq!(image.attribute("loading"), None);
    }
}
