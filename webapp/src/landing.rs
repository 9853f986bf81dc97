use dioxus::prelude::*;

use crate::common::modal::ModalBox;
use crate::components::{
    contact::Contact, hero::Hero, portfolio::Portfolio, subscribe::Subscribe,
};

#[component]
pub fn Landing() -> Element {
    rsx! {
        Hero {}

        main { class: "landing",
            Portfolio {}

            section { class: "about", id: "about",
                div { class: "container",
                    h2 { class: "section-title", "About" }
                    p {
                        "A two person studio working on product design, front end and the occasional brand. We take on a handful of projects a year and stay with them after launch."
                    }
                }
            }

            Contact {}
            Subscribe {}
        }

        footer { class: "footer",
            div { class: "container",
                p { "Showcase studio" }
            }
        }

        ModalBox {}
    }
}
