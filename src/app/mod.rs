pub mod args;
pub mod handler;
pub mod logging;
pub mod render;
