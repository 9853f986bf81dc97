use crate::service::{SvcMsg, SvcResp};

#[derive(Debug)]
pub enum MailMsg {
    Relay {
        resp: SvcResp<()>,
        subject: String,
        reply_to: Option<String>,
        body: String,
    },
}

impl From<MailMsg> for SvcMsg {
    fn from(msg: MailMsg) -> Self {
        SvcMsg::Mail(msg)
    }
}
