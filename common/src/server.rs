use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// showcase server configuration subtables
//
// split out to keep config.rs readable
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // location of the built wasm app, served for every path that is not
    // one of the relay endpoints
    pub doc_root: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum MailTransport {
    // pipe the message to a sendmail-compatible binary, as php's mail() does
    Sendmail,
    // only log the message, for development
    Log,
}

fn default_sendmail_path() -> PathBuf {
    PathBuf::from("/usr/sbin/sendmail")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MailConfig {
    pub transport: MailTransport,

    #[serde(default = "default_sendmail_path")]
    pub sendmail_path: PathBuf,

    // every form submission is relayed here
    pub inbox: String,

    // envelope sender; when unset the local mta picks one
    #[serde(default)]
    pub from: Option<String>,
}
