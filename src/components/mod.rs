pub mod icon;
pub mod principle_popup;
pub mod timed;
pub mod typing_text;
