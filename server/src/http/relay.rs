use std::sync::Arc;

use axum::extract::{Form, Json, State, rejection::FormRejection};
use tracing::{info, instrument};

use crate::http::{RelayError, svc::HttpEndpoint};
use api::relay::{ContactReq, RelayResp, SUBSCRIBE_SUBJECT, SubscribeReq};

// form relay handlers
//
// fields are trimmed and validated here, and the mail service is only asked
// to deliver once the submission is known to be well formed.  a missing field
// deserializes as empty and is reported by validation

#[instrument(skip_all)]
pub(super) async fn contact(
    State(state): State<Arc<HttpEndpoint>>,
    form: Result<Form<ContactReq>, FormRejection>,
) -> Result<Json<RelayResp>, RelayError> {
    let Form(req) = form?;
    let req = req.trimmed();

    req.validate()?;

    state
        .relay(
            req.subject_or_default().to_owned(),
            Some(req.email.clone()),
            req.mail_body(),
        )
        .await?;

    info!("contact message relayed");
    Ok(Json(RelayResp::ok()))
}

#[instrument(skip_all)]
pub(super) async fn subscribe(
    State(state): State<Arc<HttpEndpoint>>,
    form: Result<Form<SubscribeReq>, FormRejection>,
) -> Result<Json<RelayResp>, RelayError> {
    let Form(req) = form?;
    let req = req.trimmed();

    req.validate()?;

    state
        .relay(SUBSCRIBE_SUBJECT.to_owned(), None, req.mail_body())
        .await?;

    info!("subscription relayed");
    Ok(Json(RelayResp::ok()))
}

pub(super) async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::http::svc::router;
    use crate::mail::svc::MailService;
    use crate::service::*;
    use common::{
        config::parse_config,
        mail::{MailMessage, Mailer},
    };

    const CONFIG: &str = r#"
        [config.http]
        socket = "[::1]:0"
        doc_root = "/nonexistent/showcase/app"

        [config.mail]
        transport = "Log"
        inbox = "inbox@example.com"
    "#;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<MailMessage>>>);

    #[async_trait]
    impl Mailer for Recorder {
        async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
            self.0.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct Broken;

    #[async_trait]
    impl Mailer for Broken {
        async fn send(&self, _message: &MailMessage) -> anyhow::Result<()> {
            Err(anyhow::Error::msg("sendmail exited with 75"))
        }
    }

    async fn app(mailer: Arc<dyn Mailer>) -> Router {
        let config = Arc::new(parse_config(CONFIG).unwrap());
        let registry = SvcRegistry::new();

        let mail_svc = MailService::with_mailer(config.clone(), &registry, mailer);
        mail_svc.start(&registry).await.unwrap();

        let state = Arc::new(HttpEndpoint::new(config.clone(), registry).unwrap());
        router(state, &config.http.doc_root)
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn subscribe_rejects_bad_email() {
        let recorder = Recorder::default();
        let app = app(Arc::new(recorder.clone())).await;

        let (status, body) = call(app, post_form("/api/subscribe", "email=not-an-email")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"ok": false, "error": "Valid email required"}));
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscribe_relays_to_inbox() {
        let recorder = Recorder::default();
        let app = app(Arc::new(recorder.clone())).await;

        let (status, body) = call(
            app,
            post_form("/api/subscribe", "email=%20ada%40example.com%20"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let sent = recorder.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "inbox@example.com");
        assert_eq!(sent[0].subject, "New subscriber");
        assert_eq!(sent[0].reply_to, None);
        assert_eq!(sent[0].body, "New subscriber email: ada@example.com\n");
    }

    #[tokio::test]
    async fn contact_delivery_failure_is_500() {
        let app = app(Arc::new(Broken)).await;

        let (status, body) = call(
            app,
            post_form(
                "/api/contact",
                "name=Ada&email=ada%40example.com&message=Hello+there",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"ok": false, "error": "Mail failed"}));
    }

    #[tokio::test]
    async fn contact_relays_with_reply_to() {
        let recorder = Recorder::default();
        let app = app(Arc::new(recorder.clone())).await;

        let (status, body) = call(
            app,
            post_form(
                "/api/contact",
                "name=Ada&email=ada%40example.com&subject=Quote&message=Hello+there",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let sent = recorder.0.lock().unwrap();
        assert_eq!(sent[0].subject, "Quote");
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(
            sent[0].body,
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello there\n"
        );
    }

    #[tokio::test]
    async fn contact_reports_first_missing_field() {
        let app = app(Arc::new(Recorder::default())).await;

        let (status, body) = call(
            app.clone(),
            post_form("/api/contact", "email=ada%40example.com&message=Hi"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name required");

        let (status, body) = call(
            app,
            post_form("/api/contact", "name=Ada&email=ada%40example.com&message=+++"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message required");
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let app = app(Arc::new(Recorder::default())).await;

        let request = Request::builder()
            .method("GET")
            .uri("/api/contact")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(app, request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"ok": false, "error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn non_form_body_keeps_envelope() {
        let app = app(Arc::new(Recorder::default())).await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/subscribe")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("email=ada@example.com"))
            .unwrap();

        let (status, body) = call(app, request).await;

        assert!(status.is_client_error());
        assert_eq!(body["ok"], false);
    }
}
