//! Configuration loading for the Work-Calendar Engine.
//!
//! This module loads the default calendar and the working calendar from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use work_calendar_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default shift: {:?}", config.defaults().shift());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarFile, DEFAULT_SHIFT_END, DEFAULT_SHIFT_START, DefaultCalendar, EngineConfig,
};
