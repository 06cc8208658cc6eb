//! The context: registry of configuration trees and the mutation surface for
//! building and tearing them down.

use crate::tree::{
    Config, ConfigId, ConfigOption, OptionId, OrderedList, Section, SectionId, TreeError,
};

/// Owns a forest of [`Config`] trees and mediates all structural mutation.
///
/// Entities are addressed through copyable handles ([`ConfigId`],
/// [`SectionId`], [`OptionId`]) rather than references; a handle is
/// invalidated when its entity or any ancestor is destroyed, and every
/// operation rejects stale handles instead of touching recycled storage.
///
/// Creation calls are atomic: all validation and string copying happens
/// before the new entity is spliced into its parent's collection, so a
/// failed call returns an error and leaves the tree exactly as it was.
///
/// ## Example
///
/// ```
/// use cfgtree::Context;
///
/// let mut ctx = Context::new();
/// let network = ctx.alloc_config("network")?;
/// let lan = ctx.add_section(network, "interface", Some("lan"))?;
/// ctx.add_option(lan, "proto", "static")?;
/// ctx.add_option(lan, "ipaddr", "192.168.1.1")?;
///
/// let section = ctx.section(lan).unwrap();
/// assert_eq!(section.option_count(), 2);
///
/// // Destruction cascades: dropping the config releases the section
/// // and both options.
/// ctx.drop_config(network);
/// assert!(ctx.section(lan).is_none());
/// # Ok::<(), cfgtree::TreeError>(())
/// ```
#[derive(Debug, Default)]
pub struct Context {
    configs: OrderedList<Config>,
}

impl Context {
    /// Creates a context with an empty config registry.
    pub fn new() -> Self {
        Self {
            configs: OrderedList::new(),
        }
    }

    /// Creates an empty config named `name` and appends it to the registry.
    pub fn alloc_config(&mut self, name: &str) -> Result<ConfigId, TreeError> {
        let config = Config::new(name)?;
        Ok(ConfigId(self.configs.push_back(config)))
    }

    /// Creates a section of type `ty` (optionally named) and appends it to
    /// `cfg`'s section collection.
    ///
    /// `name: None` produces an anonymous section, distinct from an empty
    /// name. On error, `cfg` is left unchanged.
    pub fn add_section(
        &mut self,
        cfg: ConfigId,
        ty: &str,
        name: Option<&str>,
    ) -> Result<SectionId, TreeError> {
        // All fallible steps run before the splice.
        let section = Section::new(cfg, ty, name)?;
        let config = self.configs.get_mut(cfg.0).ok_or(TreeError::StaleConfig)?;
        Ok(SectionId {
            config: cfg,
            entry: config.sections.push_back(section),
        })
    }

    /// Creates an option holding owned copies of `name` and `value` and
    /// appends it to `sec`'s option collection.
    ///
    /// On error, `sec` is left unchanged. Duplicate option names are
    /// permitted.
    pub fn add_option(
        &mut self,
        sec: SectionId,
        name: &str,
        value: &str,
    ) -> Result<OptionId, TreeError> {
        let option = ConfigOption::new(name, value)?;
        let section = self.section_mut(sec).ok_or(TreeError::StaleSection)?;
        Ok(OptionId {
            section: sec,
            entry: section.options.push_back(option),
        })
    }

    /// Destroys a single option. Returns `false` (and does nothing) if the
    /// handle is stale.
    pub fn drop_option(&mut self, opt: OptionId) -> bool {
        match self.section_mut(opt.section) {
            Some(section) => section.options.remove(opt.entry).is_some(),
            None => false,
        }
    }

    /// Destroys a section and, with it, every option it currently holds.
    /// Returns `false` (and does nothing) if the handle is stale.
    pub fn drop_section(&mut self, sec: SectionId) -> bool {
        match self.configs.get_mut(sec.config.0) {
            Some(config) => config.sections.remove(sec.entry).is_some(),
            None => false,
        }
    }

    /// Destroys a config and, cascading, every section and option beneath
    /// it. Returns `false` (and does nothing) if the handle is stale.
    pub fn drop_config(&mut self, cfg: ConfigId) -> bool {
        self.configs.remove(cfg.0).is_some()
    }

    /// Resolves a config handle, or `None` if it is stale.
    pub fn config(&self, cfg: ConfigId) -> Option<&Config> {
        self.configs.get(cfg.0)
    }

    /// Resolves a section handle, or `None` if it or its config is stale.
    pub fn section(&self, sec: SectionId) -> Option<&Section> {
        self.config(sec.config)?.sections.get(sec.entry)
    }

    /// Resolves an option handle, or `None` if any handle on its path is
    /// stale.
    pub fn option(&self, opt: OptionId) -> Option<&ConfigOption> {
        self.section(opt.section)?.options.get(opt.entry)
    }

    /// All configs in creation order.
    pub fn configs(&self) -> impl Iterator<Item = (ConfigId, &Config)> {
        self.configs
            .iter()
            .map(|(entry, config)| (ConfigId(entry), config))
    }

    /// `cfg`'s sections in insertion order, with their handles. Empty if the
    /// handle is stale.
    pub fn sections(&self, cfg: ConfigId) -> impl Iterator<Item = (SectionId, &Section)> {
        self.config(cfg)
            .into_iter()
            .flat_map(|config| config.sections.iter())
            .map(move |(entry, section)| (SectionId { config: cfg, entry }, section))
    }

    /// `sec`'s options in insertion order, with their handles. Empty if the
    /// handle is stale.
    pub fn options(&self, sec: SectionId) -> impl Iterator<Item = (OptionId, &ConfigOption)> {
        self.section(sec)
            .into_iter()
            .flat_map(|section| section.options.iter())
            .map(move |(entry, option)| (OptionId { section: sec, entry }, option))
    }

    /// Finds a config by name. Duplicates are permitted; the first match in
    /// creation order wins.
    pub fn lookup_config(&self, name: &str) -> Option<ConfigId> {
        self.configs()
            .find(|(_, config)| config.name() == name)
            .map(|(id, _)| id)
    }

    /// Finds a named section within `cfg`. Anonymous sections never match;
    /// among duplicates the first in insertion order wins.
    pub fn lookup_section(&self, cfg: ConfigId, name: &str) -> Option<SectionId> {
        self.sections(cfg)
            .find(|(_, section)| section.name() == Some(name))
            .map(|(id, _)| id)
    }

    /// Finds an option by name within `sec`; among duplicates the first in
    /// insertion order wins.
    pub fn lookup_option(&self, sec: SectionId, name: &str) -> Option<OptionId> {
        self.options(sec)
            .find(|(_, option)| option.name() == name)
            .map(|(id, _)| id)
    }

    /// All sections of type `ty` within `cfg`, in insertion order.
    pub fn sections_of_type<'a>(
        &'a self,
        cfg: ConfigId,
        ty: &'a str,
    ) -> impl Iterator<Item = (SectionId, &'a Section)> {
        self.sections(cfg)
            .filter(move |(_, section)| section.ty() == ty)
    }

    fn section_mut(&mut self, sec: SectionId) -> Option<&mut Section> {
        self.configs
            .get_mut(sec.config.0)?
            .sections
            .get_mut(sec.entry)
    }
}
