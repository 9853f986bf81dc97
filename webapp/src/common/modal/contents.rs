use dioxus::prelude::*;

use crate::components::portfolio::PROJECTS;

#[component]
pub fn ProjectBox(index: usize) -> Element {
    let Some(project) = PROJECTS.get(index) else {
        return rsx! {
            p { "This project is no longer listed." }
        };
    };

    rsx! {
        img {
            class: "modal__image",
            src: project.image,
            alt: project.title,
        }
        h3 { class: "modal__title", "{project.title}" }
        p { class: "modal__meta", "{project.category}" }
        p { "{project.summary}" }
        if let Some(link) = project.link {
            a {
                class: "btn btn-primary",
                href: link,
                target: "_blank",
                rel: "noopener",
                "Visit project"
            }
        }
    }
}

#[component]
pub fn PrivacyBox() -> Element {
    rsx! {
        h3 { class: "modal__title", "Privacy" }
        p {
            "Messages sent through the contact form and addresses given to the newsletter are delivered to our inbox by email and are not stored on this site."
        }
        p {
            "The only thing kept in your browser is your light or dark theme choice."
        }
    }
}
