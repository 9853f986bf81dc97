use async_trait::async_trait;

use crate::service::*;

pub mod msg;
pub mod svc;

// relays form submissions to the configured inbox
//
// the mail service owns the recipient and the transport; callers only say
// what the message is about
#[async_trait]
trait RelayMailService: SvcInner {
    async fn relay(
        &self,
        subject: String,
        reply_to: Option<String>,
        body: String,
    ) -> anyhow::Result<()>;
}
