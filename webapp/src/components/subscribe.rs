use dioxus::prelude::*;
use tracing::error;

use super::{FormStatus, contact::FormMessage};
use crate::common::dom;
use api::relay::{SubscribeReq, send_subscribe};

#[component]
pub fn Subscribe() -> Element {
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| None::<FormStatus>);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if sending() {
            return;
        }

        let req = SubscribeReq { email: email() }.trimmed();

        if req.validate().is_err() {
            status.set(Some(FormStatus::Error(
                "Please enter a valid email address.",
            )));
            dom::focus_id("subscribeEmail");
            return;
        }

        status.set(None);
        sending.set(true);

        spawn(async move {
            match send_subscribe(&req).await {
                Ok(()) => {
                    status.set(Some(FormStatus::Success("Subscribed, thank you!")));
                    email.set(String::new());
                }
                Err(err) => {
                    error!("subscribe form relay failed: {err}");
                    status.set(Some(FormStatus::Error(
                        "Sorry, subscription failed. Try again later.",
                    )));
                }
            }

            sending.set(false);
        });
    };

    rsx! {
        section { class: "subscribe", id: "subscribe",
            div { class: "container",
                h2 { class: "section-title", "Occasional updates" }
                p { "A short note when we publish a case study. No more than once a month." }

                form { id: "subscribeForm", novalidate: true, onsubmit: submit,
                    div { class: "field field--inline",
                        label { class: "visually-hidden", r#for: "subscribeEmail", "Email" }
                        input {
                            id: "subscribeEmail",
                            name: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: sending(),
                            "Subscribe"
                        }
                    }

                    FormMessage { id: "subscribeMsg", status: status() }
                }
            }
        }
    }
}
