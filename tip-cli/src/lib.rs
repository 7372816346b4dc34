pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
pub mod utils;

pub use commands::{Command, CommandError};
pub use config::{AppConfig, ConfigOverrides};
pub use session::{Flow, Session};
