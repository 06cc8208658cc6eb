use super::list::EntryId;
use super::section::SectionId;
use super::TreeError;

/// A name/value pair inside a [`Section`](super::Section).
///
/// Both strings are owned copies, independent of whatever buffers the caller
/// passed in at creation time.
#[derive(Debug)]
pub struct ConfigOption {
    name: String,
    value: String,
}

impl ConfigOption {
    pub(crate) fn new(name: &str, value: &str) -> Result<Self, TreeError> {
        if name.is_empty() {
            return Err(TreeError::EmptyOptionName);
        }
        Ok(Self {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option's value. May be empty.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Handle to an option. Embeds the owning section's handle, so it is
/// invalidated when the option, its section, or its config is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId {
    pub(crate) section: SectionId,
    pub(crate) entry: EntryId,
}

impl OptionId {
    /// The owning section.
    pub fn section(&self) -> SectionId {
        self.section
    }
}
