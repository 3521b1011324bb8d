pub mod logging;
pub mod popup;
pub mod timer;
pub mod typing;
