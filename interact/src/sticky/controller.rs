use tracing::debug;

use super::{Geometry, Mode, StickyConfig, tracker::next_mode};

// the page as seen by the sticky bar controller
//
// implemented over web-sys in the webapp.  a surface that cannot find the nav
// element or the placeholder reports no geometry, which turns evaluation into
// a no-op rather than an error
pub trait StickySurface {
    fn geometry(&self, config: &StickyConfig) -> Option<Geometry>;

    fn nav_height(&self) -> Option<f64>;

    fn set_placeholder_visible(&mut self, visible: bool);

    fn set_placeholder_height(&mut self, height: f64);

    // sets the marker class on the nav element, clearing every other marker;
    // None clears them all
    fn set_marker(&mut self, config: &StickyConfig, marker: Option<Mode>);
}

// sticky bar controller
//
// owns the current mode and is the only thing that changes it
#[derive(Debug)]
pub struct StickyBar<S: StickySurface> {
    mode: Mode,
    config: StickyConfig,
    surface: S,
}

impl<S: StickySurface> StickyBar<S> {
    pub fn new(config: StickyConfig, surface: S) -> Self {
        StickyBar {
            mode: Mode::Flow,
            config,
            surface,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // returns whether anything changed; applying the current mode leaves the
    // page untouched
    pub fn apply_mode(&mut self, next: Mode) -> bool {
        if next == self.mode {
            return false;
        }

        debug!(from = ?self.mode, to = ?next, "sticky bar transition");

        self.mode = next;
        self.surface.set_placeholder_visible(next.is_fixed());
        self.surface
            .set_marker(&self.config, next.is_fixed().then_some(next));

        true
    }

    pub fn evaluate(&mut self) -> bool {
        let Some(geometry) = self.surface.geometry(&self.config) else {
            return false;
        };

        let next = next_mode(self.mode, &geometry, &self.config);

        self.apply_mode(next)
    }

    pub fn sync_placeholder_height(&mut self) {
        if let Some(height) = self.surface.nav_height() {
            self.surface.set_placeholder_height(height);
        }
    }
}
