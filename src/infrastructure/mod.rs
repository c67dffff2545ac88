pub mod services;
pub mod timer;

pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use timer::IntervalTimer;
