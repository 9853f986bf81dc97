use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::common::dom;
use interact::focus::{FOCUSABLE_SELECTOR, ModalKey, on_modal_key};

mod contents;
use contents::{PrivacyBox, ProjectBox};

pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

// Modal
//
// this enumerates all of the dialogs we can display, and what the relevant
// data is to show the correct one.  pushing this onto the modal stack will
// trigger the ModalBox, below
#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    Project(usize),
    Privacy,
}

pub fn open_modal(modal: Modal) {
    MODAL_STACK.with_mut(|v| v.push(modal));
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        v.pop();
    });
}

// ModalBox
//
// included once near the root of the page; it displays the modal on the top
// of the stack, if any
#[component]
pub fn ModalBox() -> Element {
    let top = MODAL_STACK.read().last().cloned();

    match top {
        Some(modal) => rsx! {
            ModalDialog { modal }
        },
        None => rsx! {},
    }
}

fn focusables(root: &web_sys::Element) -> Vec<HtmlElement> {
    dom::query_all(root, FOCUSABLE_SELECTOR)
        .into_iter()
        .filter_map(dom::html_element)
        // hidden elements cannot take focus
        .filter(|el| el.offset_parent().is_some())
        .collect()
}

fn focus_first() {
    let Some(root) = dom::query(".modal__dialog") else {
        return;
    };

    let target = focusables(&root)
        .into_iter()
        .next()
        .or_else(|| dom::html_element(root));

    if let Some(target) = target {
        let _ = target.focus();
    }
}

// keyboard handling for an open dialog: Escape closes it, and Tab is kept
// inside it.  the decision has to be made in the listener itself since
// preventing the default only works synchronously
fn modal_keydown(tx: futures::channel::mpsc::UnboundedSender<()>) -> Vec<EventListener> {
    let Some(document) = dom::document() else {
        return Vec::new();
    };

    let options = EventListenerOptions::enable_prevent_default();

    vec![EventListener::new_with_options(
        &document,
        "keydown",
        options,
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(root) = dom::query(".modal__dialog") else {
                return;
            };

            let focusables = focusables(&root);
            let active = dom::document().and_then(|d| d.active_element());
            let current =
                active.and_then(|active| focusables.iter().position(|el| **el == active));

            match on_modal_key(&event.key(), focusables.len(), current, event.shift_key()) {
                ModalKey::Close => {
                    event.prevent_default();
                    let _ = tx.unbounded_send(());
                }
                ModalKey::Focus(i) => {
                    event.prevent_default();
                    if let Some(target) = focusables.get(i) {
                        let _ = target.focus();
                    }
                }
                ModalKey::Pass => (),
            }
        },
    )]
}

#[component]
fn ModalDialog(modal: Modal) -> Element {
    // whatever had focus when the dialog opened gets it back on close, and
    // the page behind stops scrolling in the meantime
    let last_focus = use_hook(|| {
        dom::set_body_overflow("hidden");
        Rc::new(dom::document().and_then(|d| d.active_element()))
    });

    use_drop(move || {
        dom::set_body_overflow("");
        if let Some(el) = (*last_focus).clone().and_then(dom::html_element) {
            let _ = el.focus();
        }
    });

    dom::use_dom_events(modal_keydown, |_: ()| close_modal());

    rsx! {
        div {
            class: "modal is-open",
            id: "modal",
            "aria-hidden": "false",
            // clicking the backdrop closes the dialog
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal();
            },
            div {
                class: "modal__dialog",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                onclick: move |evt| evt.stop_propagation(),
                onmounted: move |_| focus_first(),

                div { id: "modalContent",
                    {
                        match modal {
                            Modal::Project(index) => rsx! {
                                ProjectBox { index }
                            },
                            Modal::Privacy => rsx! {
                                PrivacyBox {}
                            },
                        }
                    }
                }

                button {
                    class: "btn btn-secondary",
                    "data-modal-close": "true",
                    onclick: move |_| close_modal(),
                    "Close"
                }
            }
        }
    }
}
