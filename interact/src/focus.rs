// modal focus trap
//
// Tab past the last focusable element wraps to the first, and Shift-Tab
// before the first wraps to the last.  everything in between is left to the
// browser

pub const FOCUSABLE_SELECTOR: &str = "a[href],button:not([disabled]),input:not([disabled]),textarea:not([disabled]),select:not([disabled]),[tabindex]:not([tabindex='-1'])";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalKey {
    Close,
    Focus(usize),
    Pass,
}

// `current` is the index of the focused element among the focusables, if it
// is one of them
pub fn trap_target(len: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let last = len - 1;

    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

pub fn on_modal_key(key: &str, len: usize, current: Option<usize>, shift: bool) -> ModalKey {
    match key {
        "Escape" => ModalKey::Close,
        "Tab" => match trap_target(len, current, shift) {
            Some(i) => ModalKey::Focus(i),
            None => ModalKey::Pass,
        },
        _ => ModalKey::Pass,
    }
}
