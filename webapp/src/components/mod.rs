pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod subscribe;

// outcome line under a relay form
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormStatus {
    Success(&'static str),
    Error(&'static str),
}

impl FormStatus {
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Success(_) => "is-success",
            FormStatus::Error(_) => "is-error",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            FormStatus::Success(text) | FormStatus::Error(text) => text,
        }
    }
}
