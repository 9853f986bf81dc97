use std::{fmt::Write, sync::Arc};

use async_trait::async_trait;
use tracing::info;

use crate::server::{MailConfig, MailTransport};

mod sendmail;
pub use sendmail::SendmailMailer;

// a plain-text message bound for the configured inbox
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MailMessage {
    pub to: String,
    pub from: Option<String>,
    pub subject: String,
    pub reply_to: Option<String>,
    pub body: String,
}

// header values come (in part) from form input, so a stray line break
// would let a submitter append headers of their own
fn header_value(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl MailMessage {
    // the message as handed to sendmail -t, headers first
    pub fn render(&self) -> String {
        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(out, "To: {}", header_value(&self.to));
        if let Some(from) = &self.from {
            let _ = writeln!(out, "From: {}", header_value(from));
        }
        let _ = writeln!(out, "Subject: {}", header_value(&self.subject));
        let _ = writeln!(out, "MIME-Version: 1.0");
        let _ = writeln!(out, "Content-Type: text/plain; charset=UTF-8");
        if let Some(reply_to) = &self.reply_to {
            let _ = writeln!(out, "Reply-To: {}", header_value(reply_to));
        }
        out.push('\n');
        out.push_str(&self.body);

        out
    }
}

// mail delivery
//
// implementations hand the message off and report whether the handoff
// worked; nothing is retried
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()>;
}

// development transport that only logs what would have been sent
#[derive(Clone, Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            bytes = message.body.len(),
            "mail transport is log-only, dropping message"
        );
        Ok(())
    }
}

pub fn mailer_from_config(config: &MailConfig) -> Arc<dyn Mailer> {
    match config.transport {
        MailTransport::Sendmail => Arc::new(SendmailMailer::new(config.sendmail_path.clone())),
        MailTransport::Log => Arc::new(LogMailer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> MailMessage {
        MailMessage {
            to: String::from("inbox@example.com"),
            from: None,
            subject: String::from("New subscriber"),
            reply_to: None,
            body: String::from("New subscriber email: ada@example.com\n"),
        }
    }

    #[test]
    fn renders_headers_then_body() {
        assert_eq!(
            message().render(),
            "To: inbox@example.com\n\
             Subject: New subscriber\n\
             MIME-Version: 1.0\n\
             Content-Type: text/plain; charset=UTF-8\n\
             \n\
             New subscriber email: ada@example.com\n"
        );
    }

    #[test]
    fn reply_to_follows_content_type() {
        let rendered = MailMessage {
            reply_to: Some(String::from("ada@example.com")),
            from: Some(String::from("site@example.com")),
            ..message()
        }
        .render();

        assert!(rendered.starts_with("To: inbox@example.com\nFrom: site@example.com\n"));
        assert!(rendered.contains("charset=UTF-8\nReply-To: ada@example.com\n\n"));
    }

    #[test]
    fn header_values_cannot_inject_lines() {
        let rendered = MailMessage {
            subject: String::from("hi\r\nBcc: victim@example.com"),
            ..message()
        }
        .render();

        assert!(rendered.contains("Subject: hi Bcc: victim@example.com\n"));
        assert!(!rendered.contains("\nBcc:"));
    }

    #[tokio::test]
    async fn log_mailer_accepts_everything() {
        assert!(LogMailer.send(&message()).await.is_ok());
    }
}
