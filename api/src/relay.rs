use std::{fmt, sync::LazyLock};

use gloo_net::http::Request;
use regex::Regex;
use serde::{Deserialize, Serialize};

// structs and types

// deliberately loose: something, an @, something, a dot, something.  the
// client and the server share it so a form the page accepts is never bounced
// by the relay for its email
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email regex is valid"));

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

// json envelope returned by both relay endpoints
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RelayResp {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResp {
    pub fn ok() -> Self {
        RelayResp {
            ok: true,
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        RelayResp {
            ok: false,
            error: Some(error.into()),
        }
    }
}

// the reasons the relay refuses a submission, worded as the relay reports them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    NameRequired,
    EmailInvalid,
    MessageRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::NameRequired => "Name required",
            ValidationError::EmailInvalid => "Valid email required",
            ValidationError::MessageRequired => "Message required",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

// form fields as the page knows them, for inline error reporting
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    // id of the <p> that carries the inline error text
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "nameErr",
            Field::Email => "emailErr",
            Field::Message => "msgErr",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

fn email_field_error(email: &str) -> Option<FieldError> {
    let message = if email.is_empty() {
        "Please enter your email."
    } else if !is_email(email) {
        "Please enter a valid email address."
    } else {
        return None;
    };

    Some(FieldError {
        field: Field::Email,
        message,
    })
}

// messages

// contact form
//
// every field defaults to empty so that a missing field is reported by
// validation and not by the extractor
relay_endpoint!(Contact, "contact");

pub const DEFAULT_CONTACT_SUBJECT: &str = "New contact form message";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContactReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactReq {
    pub fn trimmed(self) -> Self {
        ContactReq {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    // first failure wins, in field order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !is_email(&self.email) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.message.is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        Ok(())
    }

    // every failing field, for the inline messages next to each input
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "Please enter your name.",
            });
        }
        errors.extend(email_field_error(&self.email));
        if self.message.is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message: "Please enter a message.",
            });
        }

        errors
    }

    pub fn subject_or_default(&self) -> &str {
        if self.subject.is_empty() {
            DEFAULT_CONTACT_SUBJECT
        } else {
            &self.subject
        }
    }

    pub fn mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
            self.name, self.email, self.message
        )
    }
}

// email subscription
relay_endpoint!(Subscribe, "subscribe");

pub const SUBSCRIBE_SUBJECT: &str = "New subscriber";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubscribeReq {
    #[serde(default)]
    pub email: String,
}

impl SubscribeReq {
    pub fn trimmed(self) -> Self {
        SubscribeReq {
            email: self.email.trim().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_email(&self.email) {
            return Err(ValidationError::EmailInvalid);
        }
        Ok(())
    }

    pub fn mail_body(&self) -> String {
        format!("New subscriber email: {}\n", self.email)
    }
}

// client

async fn post_form<T: Serialize>(url: &str, req: &T) -> anyhow::Result<()> {
    let body = serde_urlencoded::to_string(req)?;

    let resp = Request::post(url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)?
        .send()
        .await?;

    let status = resp.status();
    let envelope: RelayResp = resp.json().await?;

    if !(200..300).contains(&status) || !envelope.ok {
        return Err(anyhow::Error::msg(
            envelope
                .error
                .unwrap_or_else(|| format!("request failed with status {status}")),
        ));
    }

    Ok(())
}
