//! The hierarchical configuration tree: configs, sections, options, and the
//! ordered-list primitive that links every level together.

mod config;
mod error;
mod list;
mod option;
mod section;

pub use config::{Config, ConfigId};
pub use error::TreeError;
pub use list::{EntryId, OrderedList};
pub use option::{ConfigOption, OptionId};
pub use section::{Section, SectionId};
