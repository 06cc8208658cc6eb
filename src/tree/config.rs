use super::list::{EntryId, OrderedList};
use super::section::Section;
use super::TreeError;

/// Root-level named container of sections; one logical configuration file's
/// in-memory tree. Owned by the [`Context`](crate::Context) that created it.
#[derive(Debug)]
pub struct Config {
    name: String,
    pub(crate) sections: OrderedList<Section>,
}

impl Config {
    pub(crate) fn new(name: &str) -> Result<Self, TreeError> {
        if name.is_empty() {
            return Err(TreeError::EmptyConfigName);
        }
        Ok(Self {
            name: name.to_owned(),
            sections: OrderedList::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The config's sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().map(|(_, section)| section)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// Handle to a config within its owning context. Invalidated when the config
/// is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigId(pub(crate) EntryId);
