use super::{Geometry, Mode, StickyConfig};

// viewport tracker
//
// decides the next mode from the current one and a fresh geometry snapshot.
// in flow mode the nav rect is where the bar actually sits; in the fixed modes
// the placeholder rect stands in for that position, since the bar itself is
// pinned to a viewport edge
//
// transitions back toward flow must overshoot the threshold by more than the
// hysteresis margin, which keeps the bar from flipping every frame when the
// page hovers near a boundary
pub fn next_mode(current: Mode, geometry: &Geometry, config: &StickyConfig) -> Mode {
    if let Some(section_top) = geometry.next_section_top {
        if section_top <= geometry.viewport_height {
            return Mode::Flow;
        }
    }

    let threshold = geometry.flow_threshold();

    match current {
        Mode::Flow => {
            if geometry.nav.bottom > geometry.viewport_height + config.epsilon {
                Mode::Bottom
            } else if geometry.nav.top <= 0.0 {
                // exact edge, no epsilon: a nav top still above zero stays in flow
                Mode::Top
            } else {
                Mode::Flow
            }
        }
        Mode::Bottom => {
            if geometry.placeholder.top < threshold - config.hysteresis {
                Mode::Flow
            } else {
                Mode::Bottom
            }
        }
        Mode::Top => {
            // checked first, since anything past the flow threshold also
            // satisfies the flow condition below
            if geometry.placeholder.top > threshold + config.hysteresis {
                Mode::Bottom
            } else if geometry.placeholder.top > config.hysteresis {
                Mode::Flow
            } else {
                Mode::Top
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticky::{Rect, layout_viewport_height};

    const VIEWPORT: f64 = 800.0;
    const NAV: f64 = 60.0;

    // the bar sits in the flow with its top at `top`
    fn in_flow(top: f64) -> Geometry {
        Geometry {
            viewport_height: VIEWPORT,
            nav: Rect::new(top, NAV),
            placeholder: Rect::new(0.0, 0.0),
            next_section_top: None,
        }
    }

    // the bar is pinned to the bottom edge and the placeholder top is at `top`
    fn pinned_bottom(top: f64) -> Geometry {
        Geometry {
            viewport_height: VIEWPORT,
            nav: Rect::new(VIEWPORT - NAV, NAV),
            placeholder: Rect::new(top, NAV),
            next_section_top: None,
        }
    }

    fn pinned_top(top: f64) -> Geometry {
        Geometry {
            viewport_height: VIEWPORT,
            nav: Rect::new(0.0, NAV),
            placeholder: Rect::new(top, NAV),
            next_section_top: None,
        }
    }

    #[test]
    fn flow_is_stable_inside_viewport() {
        let config = StickyConfig::default();

        for top in [0.5, 1.0, 100.0, 400.0, 739.0, 740.0] {
            let geometry = in_flow(top);
            assert!(geometry.nav.bottom <= VIEWPORT);
            assert_eq!(next_mode(Mode::Flow, &geometry, &config), Mode::Flow, "top {top}");
        }
    }

    #[test]
    fn pinch_zoom_keeps_visible_bar_in_flow() {
        let config = StickyConfig::default();

        // 2x zoom halves the visual viewport, but the nav rect is still in
        // layout viewport coordinates
        let layout = layout_viewport_height(VIEWPORT, Some(VIEWPORT / 2.0)).unwrap();
        let geometry = Geometry {
            viewport_height: layout,
            ..in_flow(500.0)
        };

        assert_eq!(next_mode(Mode::Flow, &geometry, &config), Mode::Flow);
    }

    #[test]
    fn epsilon_absorbs_subpixel_overhang() {
        let config = StickyConfig::default();

        assert_eq!(next_mode(Mode::Flow, &in_flow(740.8), &config), Mode::Flow);
        assert_eq!(next_mode(Mode::Flow, &in_flow(741.5), &config), Mode::Bottom);
    }

    #[test]
    fn bar_below_the_fold_pins_to_bottom() {
        let config = StickyConfig::default();

        // nav bottom at 850 with the page at scroll 0
        let geometry = in_flow(790.0);
        assert_eq!(geometry.nav.bottom, 850.0);
        assert_eq!(next_mode(Mode::Flow, &geometry, &config), Mode::Bottom);
    }

    #[test]
    fn bar_scrolled_past_top_pins_to_top() {
        let config = StickyConfig::default();

        assert_eq!(next_mode(Mode::Flow, &in_flow(0.0), &config), Mode::Top);
        assert_eq!(next_mode(Mode::Flow, &in_flow(-25.0), &config), Mode::Top);
    }

    #[test]
    fn bottom_returns_to_flow_past_hysteresis() {
        let config = StickyConfig::default();

        // 5 past the 10 unit margin below the 740 threshold
        assert_eq!(
            next_mode(Mode::Bottom, &pinned_bottom(800.0 - 60.0 - 15.0), &config),
            Mode::Flow
        );
    }

    #[test]
    fn bottom_holds_when_merely_touching_margin() {
        let config = StickyConfig::default();

        for top in [900.0, 745.0, 740.0, 735.0, 730.0] {
            assert_eq!(
                next_mode(Mode::Bottom, &pinned_bottom(top), &config),
                Mode::Bottom,
                "placeholder top {top}"
            );
        }
    }

    #[test]
    fn top_returns_to_flow_past_hysteresis() {
        let config = StickyConfig::default();

        assert_eq!(next_mode(Mode::Top, &pinned_top(-200.0), &config), Mode::Top);
        assert_eq!(next_mode(Mode::Top, &pinned_top(0.0), &config), Mode::Top);
        assert_eq!(next_mode(Mode::Top, &pinned_top(10.0), &config), Mode::Top);
        assert_eq!(next_mode(Mode::Top, &pinned_top(10.5), &config), Mode::Flow);
    }

    #[test]
    fn top_jumps_to_bottom_when_placeholder_falls_past_threshold() {
        let config = StickyConfig::default();

        assert_eq!(next_mode(Mode::Top, &pinned_top(760.0), &config), Mode::Bottom);
        assert_eq!(next_mode(Mode::Top, &pinned_top(750.0), &config), Mode::Flow);
    }

    #[test]
    fn zero_hysteresis_still_requires_a_crossing() {
        let config = StickyConfig {
            hysteresis: 0.0,
            ..StickyConfig::default()
        };

        assert_eq!(next_mode(Mode::Bottom, &pinned_bottom(740.0), &config), Mode::Bottom);
        assert_eq!(next_mode(Mode::Bottom, &pinned_bottom(739.0), &config), Mode::Flow);
        assert_eq!(next_mode(Mode::Top, &pinned_top(0.0), &config), Mode::Top);
    }

    #[test]
    fn next_section_forces_flow() {
        let config = StickyConfig::default();

        for (mode, mut geometry) in [
            (Mode::Flow, in_flow(790.0)),
            (Mode::Bottom, pinned_bottom(900.0)),
            (Mode::Top, pinned_top(-300.0)),
        ] {
            geometry.next_section_top = Some(VIEWPORT);
            assert_eq!(next_mode(mode, &geometry, &config), Mode::Flow, "{mode:?}");

            geometry.next_section_top = Some(VIEWPORT + 1.0);
            assert_ne!(next_mode(mode, &geometry, &config), Mode::Flow, "{mode:?}");
        }
    }

    #[test]
    fn hovering_near_threshold_does_not_oscillate() {
        let config = StickyConfig::default();

        // the page wobbles back and forth around the 740 threshold, never more
        // than the margin past it
        let wobble = [742.0, 736.0, 744.0, 731.0, 745.0, 733.0, 741.5, 730.0, 739.0];

        let mut mode = Mode::Flow;
        let mut transitions = 0;

        for top in wobble {
            // in flow the bar itself is where the placeholder would be
            let geometry = match mode {
                Mode::Flow => in_flow(top),
                _ => pinned_bottom(top),
            };

            let next = next_mode(mode, &geometry, &config);
            if next != mode {
                transitions += 1;
            }
            mode = next;
        }

        assert_eq!(mode, Mode::Bottom);
        assert_eq!(transitions, 1);
    }
}
