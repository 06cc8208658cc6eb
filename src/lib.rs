//! In-memory hierarchical configuration store: a forest of named configs,
//! each an ordered collection of typed sections, each an ordered collection
//! of named options. A [`Context`] owns the forest and hands out stable
//! handles; see [`Context`] for the construction/destruction contract.

pub mod context;
pub mod file;
pub mod tree;
mod error;

pub use context::Context;
pub use error::Error;
pub use file::LoadError;
pub use tree::{
    Config, ConfigId, ConfigOption, EntryId, OptionId, OrderedList, Section, SectionId, TreeError,
};
