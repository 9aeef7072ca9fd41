pub mod action;
pub mod engine;
pub mod prefix;
pub mod sorter;

pub use crate::domain::model::{
    EntryPosition, GroupedEntry, MenuCategory, MenuEntry, SortOutcome, SortPlan,
};
pub use crate::domain::ports::{ClipboardSink, MenuService};
pub use crate::utils::error::Result;
