use dioxus::prelude::*;

use crate::common::modal::{Modal, open_modal};
use interact::filter::{Filter, SHOW_CLASS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    // class token the filter buttons match against
    pub category: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ecopixel",
        category: "web",
        image: "/assets/work/ecopixel.png",
        summary: "Storefront and checkout for a refurbished electronics shop, built mobile first.",
        link: None,
    },
    Project {
        title: "PRWA",
        category: "app",
        image: "/assets/work/prwa.png",
        summary: "Installable progressive web app for a regional running association, with offline race results.",
        link: None,
    },
    Project {
        title: "Northline",
        category: "brand",
        image: "/assets/work/northline.png",
        summary: "Identity and marketing site for a small freight cooperative.",
        link: None,
    },
    Project {
        title: "Fieldnotes",
        category: "app",
        image: "/assets/work/fieldnotes.png",
        summary: "Note taking app for site surveys that syncs once a connection comes back.",
        link: None,
    },
    Project {
        title: "Harbor Dental",
        category: "web",
        image: "/assets/work/harbor.png",
        summary: "Booking flow and practice site for a dental clinic.",
        link: None,
    },
];

const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("web", "Websites"),
    ("app", "Apps"),
    ("brand", "Branding"),
];

fn button_class(filter: &Filter, value: &str) -> &'static str {
    if filter.as_str() == value {
        "filter__btn is-active"
    } else {
        "filter__btn"
    }
}

fn item_class(filter: &Filter, project: &Project) -> String {
    let classes = format!("column {}", project.category);

    if filter.shows(&classes) {
        format!("{classes} {SHOW_CLASS}")
    } else {
        classes
    }
}

#[component]
pub fn Portfolio() -> Element {
    let mut filter = use_signal(Filter::default);

    rsx! {
        section { class: "portfolio", id: "work",
            div { class: "container",
                h2 { class: "section-title", "Selected work" }

                div { class: "filter", id: "myBtnContainer",
                    for (value , label) in FILTERS.iter().copied() {
                        button {
                            key: "{value}",
                            class: button_class(&filter(), value),
                            "data-filter": value,
                            onclick: move |_| filter.set(Filter::parse(Some(value))),
                            "{label}"
                        }
                    }
                }

                div { class: "portfolio__grid",
                    for (index , project) in PROJECTS.iter().enumerate() {
                        div {
                            key: "{project.title}",
                            class: item_class(&filter(), project),
                            img { src: project.image, alt: project.title, loading: "lazy" }
                            h3 { "{project.title}" }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| open_modal(Modal::Project(index)),
                                "Details"
                            }
                        }
                    }
                }
            }
        }
    }
}
