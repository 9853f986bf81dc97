use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{
    filter::FilterFn,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod http;
mod mail;
mod service;

use common::config::read_config;
use service::{ShowcaseService, SvcRegistry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/showcase/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // connection-level chatter from the http stack drowns out the relay logs
    let crate_filter = FilterFn::new(|metadata| {
        !metadata.target().starts_with("h2") && !metadata.target().starts_with("hyper")
    })
    .with_max_level_hint(Level::INFO);

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(crate_filter))
        .init();

    info!("showcase relay starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await;

    info!("starting core services");

    let registry = SvcRegistry::new();

    let mail_svc = mail::svc::MailService::create(config.clone(), &registry);
    let http_svc = http::svc::HttpService::create(config.clone(), &registry);

    mail_svc.start(&registry).await?;
    http_svc.start(&registry).await?;

    info!("startup complete!");

    tokio::signal::ctrl_c().await?;

    info!("shutting down");

    Ok(())
}
