use super::config::ConfigId;
use super::list::{EntryId, OrderedList};
use super::option::ConfigOption;
use super::TreeError;

/// A typed, optionally-named container of options within a
/// [`Config`](super::Config).
///
/// Sections may be anonymous: `name` being absent is legal and distinct from
/// an empty string. Duplicate types and names among siblings are permitted.
#[derive(Debug)]
pub struct Section {
    ty: String,
    name: Option<String>,
    config: ConfigId,
    pub(crate) options: OrderedList<ConfigOption>,
}

impl Section {
    pub(crate) fn new(config: ConfigId, ty: &str, name: Option<&str>) -> Result<Self, TreeError> {
        if ty.is_empty() {
            return Err(TreeError::EmptySectionType);
        }
        Ok(Self {
            ty: ty.to_owned(),
            name: name.map(str::to_owned),
            config,
            options: OrderedList::new(),
        })
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Non-owning back-reference to the owning config, valid for this
    /// section's entire lifetime.
    pub fn config(&self) -> ConfigId {
        self.config
    }

    /// The section's options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.iter().map(|(_, option)| option)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Handle to a section. Embeds the owning config's handle, so it is
/// invalidated when the section or its config is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId {
    pub(crate) config: ConfigId,
    pub(crate) entry: EntryId,
}

impl SectionId {
    /// The owning config.
    pub fn config(&self) -> ConfigId {
        self.config
    }
}
