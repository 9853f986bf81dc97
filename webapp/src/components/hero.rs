use std::rc::Rc;

use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedSender;
use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::common::{dom, storage};
use crate::sticky::{self, StickyHandle};
use interact::{
    active::{ACTIVE_CLASS, Section, active_section, link_target, linked_sections},
    menu::{DESKTOP_QUERY, MenuState},
    rotator::{INTERVAL_MS, REDUCED_MOTION_QUERY, Rotator},
    sticky::StickyConfig,
    theme::{DARK_QUERY, Theme},
};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#work", "Work"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

const SCREENS: &[&str] = &[
    "/assets/screens/dashboard.png",
    "/assets/screens/checkout.png",
    "/assets/screens/mobile.png",
];

const LOGO: &str = "/assets/logo.svg";

enum MenuEvent {
    Key(String),
    Breakpoint(bool),
}

fn menu_events(tx: UnboundedSender<MenuEvent>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(document) = dom::document() {
        let tx = tx.clone();
        listeners.push(EventListener::new(&document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                let _ = tx.unbounded_send(MenuEvent::Key(event.key()));
            }
        }));
    }

    let query = dom::window().and_then(|w| w.match_media(DESKTOP_QUERY).ok().flatten());

    if let Some(query) = query {
        let target = query.clone();
        listeners.push(EventListener::new(&target, "change", move |_| {
            let _ = tx.unbounded_send(MenuEvent::Breakpoint(query.matches()));
        }));
    }

    listeners
}

fn scroll_events(tx: UnboundedSender<()>) -> Vec<EventListener> {
    let Some(window) = dom::window() else {
        return Vec::new();
    };

    vec![EventListener::new(&window, "scroll", move |_| {
        let _ = tx.unbounded_send(());
    })]
}

// the sections the nav links point at, in link order, with their distance
// from the top of the page
fn page_sections() -> Vec<Section> {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();

    linked_sections(&hrefs, |id| {
        dom::by_id(id).map(|section| section.offset_top() as f64)
    })
}

fn link_class(href: &str, active: &str) -> String {
    if link_target(href) == active {
        format!("nav__link {ACTIVE_CLASS}")
    } else {
        String::from("nav__link")
    }
}

fn scroll_y() -> f64 {
    dom::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

#[component]
pub fn Hero() -> Element {
    let mut menu = use_signal(MenuState::default);
    let mut active = use_signal(|| active_section(&page_sections(), scroll_y()).to_owned());
    let mut theme =
        use_signal(|| Theme::initial(storage::stored_theme(), dom::media_matches(DARK_QUERY)));

    let mut screen = use_signal(|| Rotator::new(SCREENS.iter().copied()).background());

    // lives as long as the hero does
    let mut sticky_bar = use_signal(|| None::<Rc<StickyHandle>>);

    // only write the signal when the menu actually changes, since every
    // keypress on the page lands here
    dom::use_dom_events(menu_events, move |event| {
        let mut next = *menu.peek();

        match event {
            MenuEvent::Key(key) => {
                next.on_key(&key);
            }
            MenuEvent::Breakpoint(desktop) => next.on_breakpoint(desktop),
        }

        if next != *menu.peek() {
            menu.set(next);
        }
    });

    dom::use_dom_events(scroll_events, move |_| {
        let sections = page_sections();
        let next = active_section(&sections, scroll_y());

        if *active.peek() != next {
            active.set(next.to_owned());
        }
    });

    use_effect(move || {
        let attr = theme().as_attr();

        if let Some(root) = dom::document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", attr);
        }
    });

    use_future(move || async move {
        if dom::media_matches(REDUCED_MOTION_QUERY) {
            return;
        }

        let mut rotator = Rotator::new(SCREENS.iter().copied());

        loop {
            TimeoutFuture::new(INTERVAL_MS).await;

            rotator.advance();
            screen.set(rotator.background());
        }
    });

    let screen_style = match screen() {
        Some(background) => format!("background-image: {background};"),
        None => String::new(),
    };

    rsx! {
        header { class: "hero", id: "home",
            div { class: "hero__content container",
                h1 { class: "hero__title", "Product design that ships" }
                p { class: "hero__subtitle",
                    "We design and build web and mobile products for small teams."
                }
                div { class: "hero__actions",
                    a { class: "btn btn-primary btn-lg", href: "#work", "See our work" }
                    a { class: "btn btn-secondary btn-lg", href: "#contact", "Get in touch" }
                }
            }

            div { class: "hero__screen", style: "{screen_style}" }

            // the sticky bar inserts its placeholder next to the nav, so the
            // nav gets a wrapper of its own
            div { class: "hero__bar-slot",
                nav {
                    class: "hero__bar",
                    "aria-label": "Primary",
                    onmounted: move |_| {
                        if sticky_bar.peek().is_none() {
                            sticky_bar.set(sticky::attach(StickyConfig::default()));
                        }
                    },

                    a { class: "brand", href: "#home",
                        img {
                            class: "brand__logo",
                            src: theme().themed_asset(LOGO),
                            alt: "Showcase",
                        }
                    }

                    button {
                        class: "nav__toggle",
                        "aria-controls": "primary-menu",
                        "aria-expanded": menu().aria_expanded(),
                        "aria-label": menu().aria_label(),
                        onclick: move |_| menu.with_mut(|m| m.toggle()),
                        span { class: "nav__toggle-icon" }
                    }

                    ul {
                        class: "nav__links {menu().panel_class()}",
                        id: "primary-menu",
                        for (href , label) in NAV_LINKS.iter().copied() {
                            li { key: "{href}",
                                a {
                                    class: link_class(href, &active()),
                                    href,
                                    onclick: move |_| menu.with_mut(|m| m.close()),
                                    "{label}"
                                }
                            }
                        }
                    }

                    button {
                        class: "theme__toggle",
                        "aria-label": theme().toggle_label(),
                        onclick: move |_| {
                            let next = theme().toggled();
                            storage::store_theme(next);
                            theme.set(next);
                        },
                        if theme() == Theme::Dark {
                            "Light"
                        } else {
                            "Dark"
                        }
                    }
                }
            }
        }
    }
}
