pub mod dom;
pub mod modal;
pub mod storage;
pub mod style;
