pub mod config;
pub mod status;
pub mod view_controller;

pub use config::*;
pub use status::*;
pub use view_controller::*;
