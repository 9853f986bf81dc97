use dioxus::prelude::*;
use tracing::error;

use super::FormStatus;
use crate::common::{
    dom,
    modal::{Modal, open_modal},
};
use api::relay::{ContactReq, Field, FieldError, send_contact};

fn error_for(errors: &[FieldError], field: Field) -> &'static str {
    errors
        .iter()
        .find(|e| e.field == field)
        .map_or("", |e| e.message)
}

fn invalid(errors: &[FieldError], field: Field) -> &'static str {
    if errors.iter().any(|e| e.field == field) {
        "true"
    } else {
        "false"
    }
}

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut status = use_signal(|| None::<FormStatus>);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if sending() {
            return;
        }

        status.set(None);

        let req = ContactReq {
            name: name(),
            email: email(),
            subject: subject(),
            message: message(),
        }
        .trimmed();

        let field_errors = req.field_errors();

        if let Some(first) = field_errors.first() {
            dom::focus_id(first.field.name());
            errors.set(field_errors);
            return;
        }

        errors.set(Vec::new());
        sending.set(true);

        spawn(async move {
            match send_contact(&req).await {
                Ok(()) => {
                    status.set(Some(FormStatus::Success("Message sent. Thanks!")));
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    error!("contact form relay failed: {err}");
                    status.set(Some(FormStatus::Error(
                        "Sorry, something went wrong sending your message.",
                    )));
                }
            }

            sending.set(false);
        });
    };

    rsx! {
        section { class: "contact", id: "contact",
            div { class: "container",
                h2 { class: "section-title", "Start a project" }

                form { id: "contactForm", novalidate: true, onsubmit: submit,
                    div { class: "field",
                        label { r#for: Field::Name.name(), "Name" }
                        input {
                            id: Field::Name.name(),
                            name: Field::Name.name(),
                            r#type: "text",
                            autocomplete: "name",
                            "aria-invalid": invalid(&errors.read(), Field::Name),
                            "aria-describedby": Field::Name.error_id(),
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        p { class: "fieldErr", id: Field::Name.error_id(),
                            {error_for(&errors.read(), Field::Name)}
                        }
                    }

                    div { class: "field",
                        label { r#for: Field::Email.name(), "Email" }
                        input {
                            id: Field::Email.name(),
                            name: Field::Email.name(),
                            r#type: "email",
                            autocomplete: "email",
                            "aria-invalid": invalid(&errors.read(), Field::Email),
                            "aria-describedby": Field::Email.error_id(),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        p { class: "fieldErr", id: Field::Email.error_id(),
                            {error_for(&errors.read(), Field::Email)}
                        }
                    }

                    div { class: "field",
                        label { r#for: "subject", "Subject (optional)" }
                        input {
                            id: "subject",
                            name: "subject",
                            r#type: "text",
                            value: "{subject}",
                            oninput: move |evt| subject.set(evt.value()),
                        }
                    }

                    div { class: "field",
                        label { r#for: Field::Message.name(), "Message" }
                        textarea {
                            id: Field::Message.name(),
                            name: Field::Message.name(),
                            rows: "6",
                            "aria-invalid": invalid(&errors.read(), Field::Message),
                            "aria-describedby": Field::Message.error_id(),
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                        p { class: "fieldErr", id: Field::Message.error_id(),
                            {error_for(&errors.read(), Field::Message)}
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: sending(),
                        if sending() {
                            "Sending..."
                        } else {
                            "Send message"
                        }
                    }

                    FormMessage { id: "contactMsg", status: status() }
                }

                p { class: "contact__privacy",
                    "We only use your details to reply. "
                    button {
                        class: "link",
                        r#type: "button",
                        onclick: move |_| open_modal(Modal::Privacy),
                        "Privacy"
                    }
                }
            }
        }
    }
}

#[component]
pub fn FormMessage(id: &'static str, status: Option<FormStatus>) -> Element {
    let (class, text) = match status {
        Some(status) => (status.class(), status.text()),
        None => ("", ""),
    };

    rsx! {
        p {
            class: "formMsg {class}",
            id,
            role: "status",
            "aria-live": "polite",
            "{text}"
        }
    }
}
