pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::greeter::Greeter;
pub use config::AppConfig;
pub use core::{launcher::Launcher, Delegate, Outcome};
pub use utils::error::{ProjectError, Result};
