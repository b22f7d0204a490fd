use gloo_timers::callback::Timeout;
use js_sys::{Array, Reflect};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    HtmlStyleElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use crate::{
    anchors::{self, AnchorAction},
    config::{SiteConfig, CONFIG_ELEMENT_ID},
    dom::{ElementHandle, Page},
    error::SiteError,
    fade, keyboard, lazy_images,
    menu::{self, MenuController},
    scroll::ScrollDispatcher,
    scroll_top, styles, tiles, toc,
};

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| error.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone, PartialEq)]
struct WebElement(Element);

impl WebElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl ElementHandle for WebElement {
    fn id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = self.html() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.html()
            .and_then(|element| element.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = &other.0;
        self.0.contains(Some(other))
    }

    fn child_text(&self, selector: &str) -> Option<String> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|child| child.text_content())
    }

    fn offset_top(&self) -> f64 {
        self.html()
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or_else(|| self.viewport_top())
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Clone)]
struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    fn current() -> Result<Self, SiteError> {
        let window = window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document })
    }

    fn ready_state(&self) -> String {
        Reflect::get(&self.document, &JsValue::from_str("readyState"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    fn try_append_style_sheet(&self, css: &str, media: Option<&str>) -> Result<(), SiteError> {
        let style = self
            .document
            .create_element("style")?
            .dyn_into::<HtmlStyleElement>()
            .map_err(|element| SiteError::Js(format!("<{}> is not a style element", element.tag_name())))?;

        if let Some(media) = media {
            style.set_media(media);
        }
        style.set_text_content(Some(css));

        self.document
            .head()
            .ok_or(SiteError::NoDocument)?
            .append_child(&style)?;
        Ok(())
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn create_button(&self, class: &str, label: &str, css: &str) -> Option<WebElement> {
        let button = self.document.create_element("button").ok()?;
        button.set_class_name(class);
        button.set_inner_html(label);
        button.set_attribute("style", css).ok()?;
        self.document.body()?.append_child(&button).ok()?;
        Some(WebElement(button))
    }

    fn append_style_sheet(&self, css: &str, media: Option<&str>) {
        if let Err(error) = self.try_append_style_sheet(css, media) {
            log::warn!("could not inject stylesheet: {error}");
        }
    }
}

/// Listeners are attached for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Fire-once watcher: each element is handed to `on_visible` on its first
/// intersection and then unobserved.
fn intersection_observer(
    options: Option<&IntersectionObserverInit>,
    on_visible: impl Fn(&WebElement) + 'static,
) -> Result<IntersectionObserver, SiteError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                on_visible(&WebElement(target.clone()));
                observer.unobserve(&target);
            }
        },
    );

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();
    Ok(observer)
}

fn fade_observer() -> Result<IntersectionObserver, SiteError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(fade::THRESHOLD));
    options.set_root_margin(fade::ROOT_MARGIN);
    intersection_observer(Some(&options), |card| fade::reveal(card))
}

fn observe_all(observer: &IntersectionObserver, elements: &[WebElement]) {
    for element in elements {
        observer.observe(&element.0);
    }
}

fn read_config(page: &WebPage) -> Result<SiteConfig, SiteError> {
    let Some(element) = page.document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };

    SiteConfig::from_json(&element.text_content().unwrap_or_default())
}

fn wire_menu(page: &WebPage) -> Result<(), SiteError> {
    let Some(controller) = MenuController::locate(page) else {
        log::debug!("page has no mobile menu");
        return Ok(());
    };

    let on_toggle = controller.clone();
    listen(&controller.toggle_button().0, "click", move |_| {
        on_toggle.toggle();
        log::debug!("mobile menu open: {}", on_toggle.is_open());
    })?;

    for link in menu::menu_links(page, controller.menu()) {
        let on_link = controller.clone();
        listen(&link.0, "click", move |_| on_link.close())?;
    }

    listen(&page.document, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(WebElement);
        controller.on_document_click(target.as_ref());
    })
}

fn wire_anchors(page: &WebPage) -> Result<(), SiteError> {
    for anchor in page.query_selector_all(anchors::ANCHOR_SELECTOR) {
        let anchor_page = page.clone();
        let link = anchor.clone();
        listen(&anchor.0, "click", move |event| {
            let href = link.attribute("href");
            if anchors::on_anchor_click(&anchor_page, href.as_deref()) == AnchorAction::PreventDefault
            {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

fn wire_tiles(page: &WebPage) -> Result<(), SiteError> {
    for tile in page.query_selector_all(tiles::TILE_SELECTOR) {
        let entered = tile.clone();
        listen(&tile.0, "mouseenter", move |_| tiles::lift(&entered))?;

        let left = tile.clone();
        listen(&tile.0, "mouseleave", move |_| tiles::settle(&left))?;
    }
    Ok(())
}

fn wire_scroll_top(page: &WebPage) -> Result<Option<WebElement>, SiteError> {
    let Some(button) = scroll_top::ensure_button(page) else {
        log::warn!("scroll-to-top button could not be created");
        return Ok(None);
    };

    let click_page = page.clone();
    listen(&button.0, "click", move |_| scroll_top::on_click(&click_page))?;
    Ok(Some(button))
}

fn wire_scroll(
    page: &WebPage,
    config: SiteConfig,
    button: Option<WebElement>,
    card_watcher: Rc<IntersectionObserver>,
) -> Result<(), SiteError> {
    let dispatcher = Rc::new(ScrollDispatcher::new(config, button));
    let settle_timer: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let scroll_page = page.clone();

    listen_passive(&page.window, "scroll", move |_| {
        observe_all(&card_watcher, &dispatcher.on_scroll(&scroll_page));

        let settle_page = scroll_page.clone();
        let settle_dispatcher = Rc::clone(&dispatcher);
        let settle_watcher = Rc::clone(&card_watcher);
        // Dropping the previous handle cancels its pending timer.
        *settle_timer.borrow_mut() = Some(Timeout::new(config.settle_delay_ms, move || {
            observe_all(&settle_watcher, &settle_dispatcher.on_settle(&settle_page));
        }));
    })
}

fn wire_keyboard(page: &WebPage) -> Result<(), SiteError> {
    let key_page = page.clone();
    listen(&page.document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if keyboard::on_key(&key_page, &key_event.key()) {
            event.prevent_default();
        }
    })
}

fn on_dom_ready(
    page: &WebPage,
    config: SiteConfig,
    card_watcher: Rc<IntersectionObserver>,
) -> Result<(), SiteError> {
    wire_menu(page)?;
    wire_anchors(page)?;
    wire_tiles(page)?;
    let button = wire_scroll_top(page)?;
    wire_scroll(page, config, button, card_watcher)?;
    wire_keyboard(page)?;

    if let Ok(contents) = serde_json::to_string(&toc::table_of_contents(page)) {
        log::debug!("sections: {contents}");
    }
    log::info!("wesele site interactivity loaded");
    Ok(())
}

fn on_load(page: &WebPage, card_watcher: &IntersectionObserver) -> Result<(), SiteError> {
    observe_all(card_watcher, &fade::register_pending(page));

    let images = page.query_selector_all(lazy_images::LAZY_IMAGE_SELECTOR);
    if !images.is_empty() {
        let observer = intersection_observer(None, |image| lazy_images::load(image))?;
        observe_all(&observer, &images);
    }
    Ok(())
}

fn start(page: WebPage, config: SiteConfig) -> Result<(), SiteError> {
    styles::inject_all(&page);
    let card_watcher = Rc::new(fade_observer()?);

    let ready_state = page.ready_state();

    if ready_state == "loading" {
        let ready_page = page.clone();
        let ready_watcher = Rc::clone(&card_watcher);
        listen(&page.document, "DOMContentLoaded", move |_| {
            if let Err(error) = on_dom_ready(&ready_page, config, Rc::clone(&ready_watcher)) {
                log::error!("could not wire page interactions: {error}");
            }
        })?;
    } else {
        on_dom_ready(&page, config, Rc::clone(&card_watcher))?;
    }

    if ready_state == "complete" {
        on_load(&page, &card_watcher)?;
    } else {
        let load_page = page.clone();
        listen(&page.window, "load", move |_| {
            if let Err(error) = on_load(&load_page, &card_watcher) {
                log::error!("could not start lazy loading: {error}");
            }
        })?;
    }
    Ok(())
}

pub fn run() {
    console_error_panic_hook::set_once();

    let page = WebPage::current();
    let (config, config_error) = match page.as_ref().map(read_config) {
        Ok(Ok(config)) => (config, None),
        Ok(Err(error)) => (SiteConfig::default(), Some(error)),
        Err(_) => (SiteConfig::default(), None),
    };

    let _ = console_log::init_with_level(config.log_level.to_level().unwrap_or(log::Level::Info));

    if let Some(error) = config_error {
        log::warn!("{error}; using default settings");
    }

    if let Err(error) = page.and_then(|page| start(page, config)) {
        log::error!("site interactivity unavailable: {error}");
    }
}
