pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::clipboard;
pub use adapters::yapi::YapiClient;
pub use config::{presets, Cli, Command};
pub use core::engine::SortEngine;
pub use core::sorter::SortPlanner;
pub use domain::model::{MenuCategory, MenuEntry, SortOutcome, SortPlan};
pub use domain::ports::{ClipboardSink, MenuService};
pub use utils::error::{Result, TidyError};
