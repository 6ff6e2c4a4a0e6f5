//! Host schema
//!
//! Data structures describing a single managed host and its SSH options.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};

/// A value in a host's option table
///
/// Only [`ConfigValue::String`] entries end up in generated SSH config.
/// Everything else is kept so the host round-trips, but is never rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Other(serde_json::Value),
}

impl ConfigValue {
    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s.as_str()),
            ConfigValue::Other(_) => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Other(serde_json::Value::Bool(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Other(serde_json::Value::from(value))
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => ConfigValue::String(s),
            other => ConfigValue::Other(other),
        }
    }
}

/// In-process hook callback
pub type HookFn = Arc<dyn Fn(&Host) -> anyhow::Result<()> + Send + Sync>;

/// An opaque handle attached to a host event
///
/// Hooks are stored in order and handed back to whoever drives the
/// connection. Nothing in this crate invokes them.
#[derive(Clone)]
pub enum Hook {
    /// Shell snippet, the only form a hosts file can express
    Command(String),
    /// Closure registered programmatically
    Callback(HookFn),
}

impl Hook {
    /// Wrap a closure as a hook
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&Host) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Hook::Callback(Arc::new(f))
    }

    /// The shell command, for command hooks
    pub fn command(&self) -> Option<&str> {
        match self {
            Hook::Command(cmd) => Some(cmd.as_str()),
            Hook::Callback(_) => None,
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Command(cmd) => f.debug_tuple("Command").field(cmd).finish(),
            Hook::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl Serialize for Hook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Hook::Command(cmd) => serializer.serialize_str(cmd),
            Hook::Callback(_) => Err(S::Error::custom("callback hooks cannot be serialized")),
        }
    }
}

impl<'de> Deserialize<'de> for Hook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Hook::Command)
    }
}

/// A managed remote host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Host {
    /// Host alias, written as `Host <name>` in generated config
    pub name: String,

    /// SSH options keyed by option name (e.g. `HostName`, `Port`)
    #[serde(default)]
    pub config: HashMap<String, ConfigValue>,

    /// Free-form metadata for other tools
    #[serde(default)]
    pub props: HashMap<String, String>,

    /// Event name to hooks, in registration order
    #[serde(default)]
    pub hooks: HashMap<String, Vec<Hook>>,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Hidden hosts are skipped by listings unless asked for
    #[serde(default)]
    pub hidden: bool,

    /// Reserved for host inheritance. Not implemented.
    #[serde(default)]
    pub extend: String,

    /// Group labels used for selection
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Host {
    /// Create a host with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder pattern: set an SSH option
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Builder pattern: add a tag (ignored if already present)
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Builder pattern: set a metadata property
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Builder pattern: append a hook for an event
    pub fn with_hook(mut self, event: impl Into<String>, hook: Hook) -> Self {
        self.hooks.entry(event.into()).or_default().push(hook);
        self
    }

    /// Builder pattern: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder pattern: set hidden flag
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// String-valued SSH options, sorted by key
    ///
    /// Non-string values are dropped. The option table has no stable
    /// iteration order, so sorting keeps generated files identical
    /// across runs.
    pub fn ssh_config(&self) -> Vec<(&str, &str)> {
        let mut params: Vec<(&str, &str)> = self
            .config
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
            .collect();
        params.sort_unstable_by(|a, b| a.0.cmp(b.0));
        params
    }

    /// The description, or `"<name> host"` when it is empty
    pub fn description_or_default(&self) -> String {
        if self.description.is_empty() {
            format!("{} host", self.name)
        } else {
            self.description.clone()
        }
    }

    /// Hooks registered for an event, empty if none
    pub fn hooks_for(&self, event: &str) -> &[Hook] {
        self.hooks.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check whether the host carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
