// evaluation scheduling
//
// scroll and resize events can arrive far faster than the display refreshes.
// each event only marks an evaluation as pending; the first one in a window
// asks the caller to request an animation frame, and the rest are folded into
// that same frame.  nothing is queued, so there is never a backlog

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Scroll,
    Resize,
}

// what the frame callback should do once it runs
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Frame {
    // a resize happened since the last frame, so the placeholder height has
    // to be resynced before evaluating
    pub resized: bool,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
    resized: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // returns true when the caller must request an animation frame
    pub fn request(&mut self, trigger: Trigger) -> bool {
        if trigger == Trigger::Resize {
            self.resized = true;
        }

        if self.pending {
            return false;
        }

        self.pending = true;
        true
    }

    // called at the start of the frame callback; clearing the flag here means
    // a trigger that arrives during evaluation schedules the next frame
    // instead of being lost
    pub fn take(&mut self) -> Option<Frame> {
        if !self.pending {
            return None;
        }

        self.pending = false;

        Some(Frame {
            resized: std::mem::take(&mut self.resized),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_coalesce_into_one_frame() {
        let mut scheduler = FrameScheduler::new();

        let requests = (0..50)
            .filter(|_| scheduler.request(Trigger::Scroll))
            .count();

        assert_eq!(requests, 1);
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.take(), Some(Frame { resized: false }));
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn next_trigger_after_frame_requests_again() {
        let mut scheduler = FrameScheduler::new();

        assert!(scheduler.request(Trigger::Scroll));
        scheduler.take();

        assert!(scheduler.request(Trigger::Scroll));
        assert!(!scheduler.request(Trigger::Scroll));
    }

    #[test]
    fn resize_is_reported_once() {
        let mut scheduler = FrameScheduler::new();

        scheduler.request(Trigger::Scroll);
        scheduler.request(Trigger::Resize);
        scheduler.request(Trigger::Scroll);

        assert_eq!(scheduler.take(), Some(Frame { resized: true }));

        scheduler.request(Trigger::Scroll);
        assert_eq!(scheduler.take(), Some(Frame { resized: false }));
    }
}
