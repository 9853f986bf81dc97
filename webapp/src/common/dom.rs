use std::rc::Rc;

use dioxus::prelude::*;
use futures::{
    StreamExt,
    channel::mpsc::{UnboundedSender, unbounded},
};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

// small web-sys helpers
//
// everything here returns Option: a missing window, document or element means
// the enhancement it belongs to is simply not active on this page

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html_element(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    html_element(document()?.get_element_by_id(id)?)
}

pub fn focus_id(id: &str) {
    if let Some(element) = by_id(id) {
        let _ = element.focus();
    }
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

// dom events dioxus does not route (window, document, media queries)
//
// the raw listeners run outside of any component scope, so rather than touch
// signals there they push into a channel that a task spawned in this
// component drains.  the listeners and the task both go away with the
// component
pub fn use_dom_events<T, I, H>(install: I, mut handle: H)
where
    T: 'static,
    I: FnOnce(UnboundedSender<T>) -> Vec<EventListener> + 'static,
    H: FnMut(T) + 'static,
{
    use_hook(move || {
        let (tx, mut rx) = unbounded::<T>();

        spawn(async move {
            while let Some(event) = rx.next().await {
                handle(event);
            }
        });

        Rc::new(install(tx))
    });
}
