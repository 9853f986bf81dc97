use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::{Context, Result};
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{Router, extract::Request, routing::post};
use tokio::net::TcpListener;
use tower::Service;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, error, info, instrument};

use crate::http::relay::{contact, method_not_allowed, subscribe};
use crate::mail::msg::MailMsg;
use crate::service::*;
use api::relay::{CONTACT_URL, SUBSCRIBE_URL};
use common::config::ShowcaseConfig;

#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    registry: SvcRegistry,
    pub(super) mail_svc_sender: SvcSender,
}

impl HttpEndpoint {
    // hands a message to the mail service and waits for the delivery result
    pub(super) async fn relay(
        &self,
        subject: String,
        reply_to: Option<String>,
        body: String,
    ) -> Result<()> {
        let (tx, rx) = tokio::sync::oneshot::channel();

        self.mail_svc_sender
            .send(
                MailMsg::Relay {
                    resp: tx,
                    subject,
                    reply_to,
                    body,
                }
                .into(),
            )
            .await
            .context("Failed to send Relay message")?;

        rx.await.context("Failed to receive Relay response")?
    }
}

#[async_trait]
impl SvcInner for HttpEndpoint {
    fn new(_config: Arc<ShowcaseConfig>, registry: SvcRegistry) -> Result<Self> {
        Ok(HttpEndpoint {
            mail_svc_sender: registry.get(&ServiceType::Mail)?,
            registry,
        })
    }

    fn registry(&self) -> SvcRegistry {
        self.registry.clone()
    }

    // nothing talks to the http service over the message bus
    async fn message_handler(&self, _msg: SvcMsg) -> Result<()> {
        Err(anyhow::Error::msg("not implemented"))
    }
}

pub struct HttpService {
    config: Arc<ShowcaseConfig>,
    hyper_handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

#[async_trait]
impl ShowcaseService for HttpService {
    type Inner = HttpEndpoint;

    fn create(config: Arc<ShowcaseConfig>, _registry: &SvcRegistry) -> Self {
        HttpService {
            config,
            hyper_handle: AsyncCell::new(),
        }
    }

    async fn start(&self, registry: &SvcRegistry) -> Result<()> {
        let state = Arc::new(HttpEndpoint::new(self.config.clone(), registry.clone())?);

        let socket: SocketAddr = self
            .config
            .http
            .socket
            .parse()
            .context("Failed to parse http socket address/port")?;

        let listener = TcpListener::bind(socket)
            .await
            .with_context(|| format!("http listener failed to bind {socket}"))?;

        info!("http service listening on {socket}");

        let router = router(state, &self.config.http.doc_root);

        let hyper_handle = tokio::task::spawn(serve_http(listener, router));

        self.hyper_handle.set(hyper_handle);

        Ok(())
    }
}

// the relay endpoints only answer POST; everything else under the doc root
// is the wasm app, with unknown paths falling back to its index so the
// client-side router can take over
pub fn router(state: Arc<HttpEndpoint>, doc_root: &Path) -> Router {
    let app = ServeDir::new(doc_root).fallback(ServeFile::new(doc_root.join("index.html")));

    Router::new()
        .route(CONTACT_URL, post(contact).fallback(method_not_allowed))
        .route(SUBSCRIBE_URL, post(subscribe).fallback(method_not_allowed))
        .fallback_service(app)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all)]
async fn serve_http(listener: TcpListener, router: Router) -> Result<()> {
    let service = hyper::service::service_fn(move |request: Request<hyper::body::Incoming>| {
        router.clone().call(request)
    });

    // the main http server loop
    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(val) => val,
            Err(err) => {
                error!("error accepting connection: {err}");
                continue;
            }
        };

        debug!("accepting connection from {addr}");

        let service = service.clone();

        let io = hyper_util::rt::TokioIo::new(stream);

        tokio::task::spawn(async move {
            match hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection(io, service)
                .await
            {
                Ok(()) => (),
                Err(err) => debug!("error serving connection from {addr}: {err}"),
            }
        });
    }
}
