use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio;
use toml;
use tracing::{Level, debug, instrument};

use crate::server::{HttpConfig, MailConfig};

// showcase configuration
//
// this struct contains the options used by the relay server and the cli tools
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    pub http: HttpConfig,
    pub mail: MailConfig,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: ShowcaseConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<ShowcaseConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;
    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> Arc<ShowcaseConfig> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(filename)
        .await
        .expect("failed to read config file");

    // the parse error is printed without the document itself
    let config = match parse_config(&doc) {
        Ok(val) => val,
        Err(err) => panic!("failed to parse config file: {err}"),
    };

    debug!("successfully parsed config file");
    Arc::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::MailTransport;

    #[test]
    fn parses_config_table() {
        let config = parse_config(
            r#"
            [config.http]
            socket = "[::1]:8081"
            doc_root = "/srv/showcase/app"

            [config.mail]
            transport = "Sendmail"
            inbox = "inbox@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.socket, "[::1]:8081");
        assert_eq!(config.mail.transport, MailTransport::Sendmail);
        assert_eq!(
            config.mail.sendmail_path,
            PathBuf::from("/usr/sbin/sendmail")
        );
        assert_eq!(config.mail.from, None);
    }

    #[test]
    fn rejects_missing_mail_table() {
        let err = parse_config(
            r#"
            [config.http]
            socket = "[::1]:8081"
            doc_root = "/srv/showcase/app"
            "#,
        );

        assert!(err.is_err());
    }
}
