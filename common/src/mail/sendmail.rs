use std::{path::PathBuf, process::Stdio};

use anyhow::Context;
use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, instrument};

use super::{MailMessage, Mailer};

// hands messages to a local mta the way php's mail() does: the rendered
// message goes to `sendmail -t -i` on stdin and the recipients come from
// the headers
#[derive(Clone, Debug)]
pub struct SendmailMailer {
    path: PathBuf,
}

impl SendmailMailer {
    pub fn new(path: PathBuf) -> Self {
        SendmailMailer { path }
    }
}

#[async_trait]
impl Mailer for SendmailMailer {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
        let mut child = Command::new(&self.path)
            .arg("-t")
            .arg("-i")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .context("failed to spawn sendmail")?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow::Error::msg("sendmail stdin unavailable"))?;

            stdin
                .write_all(message.render().as_bytes())
                .await
                .context("failed to write message to sendmail")?;
        }

        let output = child
            .wait_with_output()
            .await
            .context("failed to wait for sendmail")?;

        if !output.status.success() {
            return Err(anyhow::Error::msg(format!(
                "sendmail exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("message handed to sendmail");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_a_delivery_failure() {
        let mailer = SendmailMailer::new(PathBuf::from("/nonexistent/showcase/sendmail"));

        let result = mailer
            .send(&MailMessage {
                to: String::from("inbox@example.com"),
                from: None,
                subject: String::from("test"),
                reply_to: None,
                body: String::from("test\n"),
            })
            .await;

        assert!(result.is_err());
    }
}
