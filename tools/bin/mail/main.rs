use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use api::relay::{ContactReq, SubscribeReq};
use common::{
    config::read_config,
    mail::{MailMessage, Mailer, mailer_from_config},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file
    #[arg(short, long, default_value = "/etc/showcase/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// send a test message to the configured inbox
    Check {
        #[command(subcommand)]
        form: CheckForm,
    },
    /// print a message as it would be handed to sendmail, without sending it
    Render {
        #[command(subcommand)]
        form: CheckForm,
    },
}

#[derive(Clone, Subcommand)]
enum CheckForm {
    /// the message a subscribe submission produces
    Subscribe {
        #[arg(long)]
        email: String,
    },
    /// the message a contact submission produces
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "showcase-mail check")]
        message: String,
    },
}

// builds the same message the relay server would for this submission,
// validation included
fn build_message(form: CheckForm, inbox: String, from: Option<String>) -> Result<MailMessage> {
    let (subject, reply_to, body) = match form {
        CheckForm::Subscribe { email } => {
            let req = SubscribeReq { email }.trimmed();
            req.validate()?;
            (
                api::relay::SUBSCRIBE_SUBJECT.to_owned(),
                None,
                req.mail_body(),
            )
        }
        CheckForm::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let req = ContactReq {
                name,
                email,
                subject,
                message,
            }
            .trimmed();
            req.validate()?;
            (
                req.subject_or_default().to_owned(),
                Some(req.email.clone()),
                req.mail_body(),
            )
        }
    };

    Ok(MailMessage {
        to: inbox,
        from,
        subject,
        reply_to,
        body,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = read_config(PathBuf::from(cli.config)).await;

    match cli.command {
        Commands::Check { form } => {
            let message =
                build_message(form, config.mail.inbox.clone(), config.mail.from.clone())?;

            mailer_from_config(&config.mail).send(&message).await?;

            info!("test message handed to {:?} transport", config.mail.transport);
        }
        Commands::Render { form } => {
            let message =
                build_message(form, config.mail.inbox.clone(), config.mail.from.clone())?;

            print!("{}", message.render());
        }
    }

    Ok(())
}
