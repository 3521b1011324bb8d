pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod utils;
