use std::sync::Arc;

use anyhow::Result;
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use common::{
    config::ShowcaseConfig,
    mail::{MailMessage, Mailer, mailer_from_config},
};

use crate::mail::{RelayMailService, msg::MailMsg};
use crate::service::*;

pub struct MailRelay {
    registry: SvcRegistry,
    inbox: String,
    from: Option<String>,
    mailer: Arc<dyn Mailer>,
}

impl MailRelay {
    fn with_mailer(
        config: Arc<ShowcaseConfig>,
        registry: SvcRegistry,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        MailRelay {
            registry,
            inbox: config.mail.inbox.clone(),
            from: config.mail.from.clone(),
            mailer,
        }
    }
}

#[async_trait]
impl RelayMailService for MailRelay {
    #[instrument(skip(self, reply_to, body))]
    async fn relay(
        &self,
        subject: String,
        reply_to: Option<String>,
        body: String,
    ) -> anyhow::Result<()> {
        let message = MailMessage {
            to: self.inbox.clone(),
            from: self.from.clone(),
            subject,
            reply_to,
            body,
        };

        self.mailer.send(&message).await.inspect_err(|err| {
            error!("mail delivery failed: {err:#}");
        })?;

        info!("relayed message to inbox");
        Ok(())
    }
}

#[async_trait]
impl SvcInner for MailRelay {
    fn new(config: Arc<ShowcaseConfig>, registry: SvcRegistry) -> Result<Self> {
        let mailer = mailer_from_config(&config.mail);

        Ok(MailRelay::with_mailer(config, registry, mailer))
    }

    fn registry(&self) -> SvcRegistry {
        self.registry.clone()
    }

    async fn message_handler(&self, msg: SvcMsg) -> Result<()> {
        match msg {
            SvcMsg::Mail(message) => match message {
                MailMsg::Relay {
                    resp,
                    subject,
                    reply_to,
                    body,
                } => {
                    self.respond(resp, self.relay(subject, reply_to, body))
                        .await
                }
            },
        }
    }
}

pub struct MailService {
    config: Arc<ShowcaseConfig>,
    mailer: Arc<dyn Mailer>,
    receiver: Arc<Mutex<SvcReceiver>>,
    handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

impl MailService {
    // the transport is normally picked from the config; tests swap in their own
    pub fn with_mailer(
        config: Arc<ShowcaseConfig>,
        registry: &SvcRegistry,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel::<SvcMsg>(32);

        registry
            .insert(ServiceType::Mail, tx)
            .expect("failed to add mail sender to registry");

        MailService {
            config,
            mailer,
            receiver: Arc::new(Mutex::new(rx)),
            handle: AsyncCell::new(),
        }
    }
}

#[async_trait]
impl ShowcaseService for MailService {
    type Inner = MailRelay;

    fn create(config: Arc<ShowcaseConfig>, registry: &SvcRegistry) -> Self {
        let mailer = mailer_from_config(&config.mail);

        MailService::with_mailer(config, registry, mailer)
    }

    async fn start(&self, registry: &SvcRegistry) -> Result<()> {
        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(MailRelay::with_mailer(
            self.config.clone(),
            registry.clone(),
            self.mailer.clone(),
        ));

        let serve = {
            async move {
                while let Some(msg) = receiver.lock().await.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => error!(error = %err, "mail service failed to reply to message"),
                        }
                    });
                }

                Err::<(), anyhow::Error>(anyhow::Error::msg("channel disconnected"))
            }
        };

        let handle = tokio::task::spawn(serve);

        self.handle.set(handle);

        Ok(())
    }
}
