use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use tracing::debug;
use web_sys::{Element, HtmlElement};

use crate::common::dom;
use interact::sticky::{
    FrameScheduler, Geometry, Mode, Rect, StickyBar, StickyConfig, StickySurface, Trigger,
    layout_viewport_height,
};

// the hero nav bar and the placeholder that holds its place in the flow
// while it is fixed
pub struct DomSurface {
    nav: HtmlElement,
    placeholder: HtmlElement,
}

impl DomSurface {
    fn new(nav: HtmlElement, config: &StickyConfig) -> Option<Self> {
        let document = dom::document()?;
        let placeholder = dom::html_element(document.create_element("div").ok()?)?;

        placeholder.set_class_name(&config.placeholder_class);
        placeholder.set_attribute("aria-hidden", "true").ok()?;
        placeholder.style().set_property("display", "none").ok()?;

        nav.parent_node()?
            .insert_before(&placeholder, Some(&nav))
            .ok()?;

        Some(DomSurface { nav, placeholder })
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.placeholder.remove();
    }
}

fn rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect {
        top: bounds.top(),
        bottom: bounds.bottom(),
    }
}

// layout viewport, the same box the rects and the fixed bar are positioned
// in.  the visual viewport only triggers re-evaluation on resize
fn viewport_height() -> Option<f64> {
    let client_height = dom::document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |root| root.client_height() as f64);
    let inner_height = dom::window().and_then(|w| w.inner_height().ok()?.as_f64());

    layout_viewport_height(client_height, inner_height)
}

impl StickySurface for DomSurface {
    fn geometry(&self, config: &StickyConfig) -> Option<Geometry> {
        Some(Geometry {
            viewport_height: viewport_height()?,
            nav: rect(&self.nav),
            placeholder: rect(&self.placeholder),
            next_section_top: config
                .next_section_selector
                .as_deref()
                .and_then(dom::query)
                .map(|section| rect(&section).top),
        })
    }

    fn nav_height(&self) -> Option<f64> {
        Some(self.nav.get_bounding_client_rect().height())
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.placeholder.style().set_property("display", display);
    }

    fn set_placeholder_height(&mut self, height: f64) {
        let _ = self
            .placeholder
            .style()
            .set_property("height", &format!("{height}px"));
    }

    fn set_marker(&mut self, config: &StickyConfig, marker: Option<Mode>) {
        let classes = self.nav.class_list();

        let _ = classes.remove_2(&config.bottom_class, &config.top_class);

        if let Some(class) = marker.and_then(|mode| config.marker(mode)) {
            let _ = classes.add_1(class);
        }
    }
}

// sticky bar attached to the page
//
// everything is driven from scroll and resize events, at most once per
// animation frame.  dropping the handle detaches the listeners and removes
// the placeholder
pub struct StickyHandle {
    bar: RefCell<StickyBar<DomSurface>>,
    scheduler: RefCell<FrameScheduler>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl StickyHandle {
    fn schedule(self: &Rc<Self>, trigger: Trigger) {
        if !self.scheduler.borrow_mut().request(trigger) {
            return;
        }

        let handle = Rc::downgrade(self);
        let frame = request_animation_frame(move |_| {
            if let Some(handle) = handle.upgrade() {
                handle.on_frame();
            }
        });

        *self.frame.borrow_mut() = Some(frame);
    }

    fn on_frame(&self) {
        self.frame.borrow_mut().take();

        let Some(frame) = self.scheduler.borrow_mut().take() else {
            return;
        };

        let mut bar = self.bar.borrow_mut();

        if frame.resized {
            bar.sync_placeholder_height();
        }

        bar.evaluate();
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };

        let listen = |target: &web_sys::EventTarget, event: &'static str, trigger: Trigger| {
            let handle: Weak<Self> = Rc::downgrade(self);
            EventListener::new(target, event, move |_| {
                if let Some(handle) = handle.upgrade() {
                    handle.schedule(trigger);
                }
            })
        };

        let mut listeners = vec![
            listen(&window, "scroll", Trigger::Scroll),
            listen(&window, "resize", Trigger::Resize),
        ];

        if let Some(viewport) = window.visual_viewport() {
            listeners.push(listen(&viewport, "resize", Trigger::Resize));
        }

        *self.listeners.borrow_mut() = listeners;
    }
}

pub fn attach(config: StickyConfig) -> Option<Rc<StickyHandle>> {
    let Some(nav) = dom::query(&config.nav_selector).and_then(dom::html_element) else {
        debug!(selector = %config.nav_selector, "no sticky nav on this page");
        return None;
    };

    let Some(surface) = DomSurface::new(nav, &config) else {
        debug!("could not insert the sticky bar placeholder");
        return None;
    };

    let mut bar = StickyBar::new(config, surface);
    bar.sync_placeholder_height();

    let handle = Rc::new(StickyHandle {
        bar: RefCell::new(bar),
        scheduler: RefCell::new(FrameScheduler::new()),
        frame: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });

    handle.install_listeners();
    handle.bar.borrow_mut().evaluate();

    Some(handle)
}
