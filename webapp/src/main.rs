#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;

mod landing;
use landing::Landing;

mod sticky;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the site is a single page; sections are reached by fragment links
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::LANDING_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
