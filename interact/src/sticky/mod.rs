use serde::{Deserialize, Serialize};

pub mod controller;
pub mod schedule;
pub mod tracker;

pub use controller::{StickyBar, StickySurface};
pub use schedule::{Frame, FrameScheduler, Trigger};
pub use tracker::next_mode;

// display mode of the navigation bar
//
// the bar starts in the normal document flow and is pinned to one of the
// viewport edges once it would otherwise scroll out of view
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Mode {
    #[default]
    Flow,
    Bottom,
    Top,
}

impl Mode {
    pub fn is_fixed(&self) -> bool {
        !matches!(self, Mode::Flow)
    }
}

// vertical extent of an element relative to the viewport, as reported by
// getBoundingClientRect()
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Rect {
            top,
            bottom: top + height,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

// geometry snapshot
//
// recomputed for every evaluation and never stored.  next_section_top is only
// present when an early-exit element is configured and found in the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub viewport_height: f64,
    pub nav: Rect,
    pub placeholder: Rect,
    pub next_section_top: Option<f64>,
}

impl Geometry {
    // the placeholder top at which a fixed-bottom bar would sit exactly where
    // the flow bar would be
    pub fn flow_threshold(&self) -> f64 {
        self.viewport_height - self.nav.height()
    }
}

// height of the layout viewport, which getBoundingClientRect() and
// `position: fixed` are both measured against.  the visual viewport shrinks
// under pinch zoom and is never used here.  a document element without
// layout reports 0, and the window's inner height stands in for it
pub fn layout_viewport_height(client_height: f64, inner_height: Option<f64>) -> Option<f64> {
    if client_height > 0.0 {
        Some(client_height)
    } else {
        inner_height.filter(|height| *height > 0.0)
    }
}

fn default_hysteresis() -> f64 {
    10.0
}

fn default_epsilon() -> f64 {
    1.0
}

fn default_nav_selector() -> String {
    String::from(".hero .hero__bar")
}

fn default_placeholder_class() -> String {
    String::from("hero__bar-placeholder")
}

fn default_bottom_class() -> String {
    String::from("is-fixed-bottom")
}

fn default_top_class() -> String {
    String::from("is-fixed-top")
}

// sticky bar configuration
//
// hysteresis and the early-exit section differ from page to page, so both
// are configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StickyConfig {
    #[serde(default = "default_hysteresis")]
    pub hysteresis: f64,

    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    #[serde(default = "default_nav_selector")]
    pub nav_selector: String,

    // once the top of this element enters the viewport, the bar returns to
    // the document flow regardless of its current mode
    #[serde(default)]
    pub next_section_selector: Option<String>,

    #[serde(default = "default_placeholder_class")]
    pub placeholder_class: String,

    #[serde(default = "default_bottom_class")]
    pub bottom_class: String,

    #[serde(default = "default_top_class")]
    pub top_class: String,
}

impl Default for StickyConfig {
    fn default() -> Self {
        StickyConfig {
            hysteresis: default_hysteresis(),
            epsilon: default_epsilon(),
            nav_selector: default_nav_selector(),
            next_section_selector: None,
            placeholder_class: default_placeholder_class(),
            bottom_class: default_bottom_class(),
            top_class: default_top_class(),
        }
    }
}

impl StickyConfig {
    pub fn marker(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Flow => None,
            Mode::Bottom => Some(&self.bottom_class),
            Mode::Top => Some(&self.top_class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fills_defaults() {
        let config: StickyConfig =
            serde_json::from_str(r##"{"hysteresis": 15.0, "next_section_selector": "#about"}"##)
                .unwrap();

        assert_eq!(config.hysteresis, 15.0);
        assert_eq!(config.epsilon, 1.0);
        assert_eq!(config.next_section_selector.as_deref(), Some("#about"));
        assert_eq!(config.nav_selector, ".hero .hero__bar");
    }

    #[test]
    fn markers_follow_mode() {
        let config = StickyConfig::default();

        assert_eq!(config.marker(Mode::Flow), None);
        assert_eq!(config.marker(Mode::Bottom), Some("is-fixed-bottom"));
        assert_eq!(config.marker(Mode::Top), Some("is-fixed-top"));
    }

    #[test]
    fn viewport_is_the_layout_viewport() {
        assert_eq!(layout_viewport_height(800.0, Some(815.0)), Some(800.0));
        assert_eq!(layout_viewport_height(0.0, Some(815.0)), Some(815.0));
        assert_eq!(layout_viewport_height(0.0, None), None);
        assert_eq!(layout_viewport_height(0.0, Some(0.0)), None);
    }

    #[test]
    fn threshold_uses_nav_height() {
        let geometry = Geometry {
            viewport_height: 800.0,
            nav: Rect::new(790.0, 60.0),
            placeholder: Rect::new(790.0, 60.0),
            next_section_top: None,
        };

        assert_eq!(geometry.flow_threshold(), 740.0);
    }
}
