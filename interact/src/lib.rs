// platform-independent interaction logic
//
// everything in here is plain data plus the rules that move it between states;
// the webapp owns the DOM and calls into these types from its event handlers,
// which keeps the interesting parts testable without a browser
pub mod active;
pub mod filter;
pub mod focus;
pub mod menu;
pub mod rotator;
pub mod sticky;
pub mod theme;
