//! Configuration-setting descriptors and stability tags.
//!
//! Settings are registered with descriptors carrying stability tags; tooling
//! queries the registry by key to learn whether a setting is tagged. This is
//! the runtime-discoverable surface for stability markers: present or absent
//! per key, no parameters.

use dashmap::DashMap;

/// Key of the setting controlling default null ordering in `order by`.
pub const DEFAULT_NULL_ORDERING: &str = "ormbind.order_by.default_null_ordering";

/// Key of the legacy identifier quoting setting, kept for upgrade parity.
pub const LEGACY_IDENTIFIER_QUOTING: &str = "ormbind.compat.legacy_identifier_quoting";

/// Key of the raw type binding escape hatch, unsupported outside porting.
pub const RAW_TYPE_BINDING: &str = "ormbind.unsafe.raw_type_binding";

/// Stability tag attached to a configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StabilityTag {
    /// Kept temporarily so upgraded deployments retain old behavior.
    Compatibility,
    /// Unsupported; exists only to ease porting from other mappers.
    Unsafe,
}

/// Descriptor for one configuration setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDef {
    /// Setting key.
    pub key: String,
    /// Default value if not configured.
    pub default_value: Option<String>,
    /// Stability tags.
    pub tags: Vec<StabilityTag>,
}

impl SettingDef {
    /// Create a descriptor with no default and no tags.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_value: None,
            tags: Vec::new(),
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Attach a stability tag.
    pub fn with_tag(mut self, tag: StabilityTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Whether this setting carries the given tag.
    pub fn has_tag(&self, tag: StabilityTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Registry of known configuration settings, keyed by setting key.
#[derive(Debug, Default)]
pub struct SettingsRegistry {
    settings: DashMap<String, SettingDef>,
}

impl SettingsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in bootstrap settings.
    pub fn builtin() -> Self {
        let registry = Self::new();
        registry.register(SettingDef::new(DEFAULT_NULL_ORDERING).with_default("none"));
        registry.register(
            SettingDef::new(LEGACY_IDENTIFIER_QUOTING)
                .with_default("false")
                .with_tag(StabilityTag::Compatibility),
        );
        registry.register(SettingDef::new(RAW_TYPE_BINDING).with_tag(StabilityTag::Unsafe));
        registry
    }

    /// Register a setting descriptor, replacing any existing entry.
    pub fn register(&self, def: SettingDef) {
        self.settings.insert(def.key.clone(), def);
    }

    /// Look up a setting descriptor by key.
    pub fn get(&self, key: &str) -> Option<SettingDef> {
        self.settings.get(key).map(|entry| entry.value().clone())
    }

    /// Whether the setting with the given key carries the given tag.
    ///
    /// Unknown keys report `false`.
    pub fn is_tagged(&self, key: &str, tag: StabilityTag) -> bool {
        self.settings
            .get(key)
            .map(|entry| entry.has_tag(tag))
            .unwrap_or(false)
    }

    /// Keys of all settings carrying the given tag, sorted.
    pub fn tagged_with(&self, tag: StabilityTag) -> Vec<String> {
        let mut keys: Vec<String> = self
            .settings
            .iter()
            .filter(|entry| entry.has_tag(tag))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        keys
    }
}
