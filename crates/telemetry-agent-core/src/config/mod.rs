// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration for the telemetry agent.
//!
//! Configuration values are read by fixed dotted key names (for example
//! `reporter.type`) out of a [`Resolver`]. Sources are applied in the order
//! they are registered on the [`ResolverBuilder`], with later sources
//! overriding earlier ones. The conventional layering, from lowest to highest
//! priority, is:
//!
//! 1. **Defaults** - declared alongside each flag in the [`flags::FlagSet`]
//! 2. **YAML file** - optional configuration file ([`yaml::YamlConfigSource`])
//! 3. **Environment variables** - [`env::EnvConfigSource`]
//! 4. **Command-line flags** - values given explicitly on the command line
//!    ([`flags::FlagConfigSource`])
//!
//! Empty string values are treated as "not configured" at every layer, so an
//! empty environment variable never shadows a value from the file below it.

pub mod env;
pub mod flags;
pub mod yaml;

use std::collections::HashMap;

use crate::config::flags::FlagSet;

/// Errors raised while loading configuration sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Unsupported configuration field: {0}")]
    UnsupportedField(String),
}

/// A single layer of configuration values.
///
/// Sources write into the resolver with [`Resolver::set`]; a later source
/// simply overwrites whatever an earlier one stored for the same key.
pub trait ConfigSource {
    fn load(&self, resolver: &mut Resolver) -> Result<(), ConfigError>;
}

/// Read-only view over the merged configuration layers.
///
/// The resolver only ever answers one question: "what is the final string
/// value for key K". Keys that no source set fall back to the default
/// declared with the flag; unregistered keys resolve to the empty string.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    defaults: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl Resolver {
    /// Create a resolver seeded with the defaults of every registered flag.
    #[must_use]
    pub fn new(flags: &FlagSet) -> Self {
        let defaults = flags
            .iter()
            .map(|flag| (flag.name().to_string(), flag.default().to_string()))
            .collect();
        Resolver {
            defaults,
            values: HashMap::new(),
        }
    }

    /// Store a value for a key, overriding lower layers.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// The final string value for a key.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Names of every registered flag, in no particular order.
    #[must_use]
    pub fn registered_keys(&self) -> Vec<String> {
        self.defaults.keys().cloned().collect()
    }
}

/// Builder applying configuration sources in registration order.
#[derive(Default)]
pub struct ResolverBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ResolverBuilder {
    #[must_use]
    pub fn add_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Seed defaults from the flag set, then load every source in order.
    pub fn build(self, flags: &FlagSet) -> Result<Resolver, ConfigError> {
        let mut resolver = Resolver::new(flags);
        for source in &self.sources {
            source.load(&mut resolver)?;
        }
        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapConfigSource(Vec<(&'static str, &'static str)>);

    impl ConfigSource for MapConfigSource {
        fn load(&self, resolver: &mut Resolver) -> Result<(), ConfigError> {
            for (key, value) in &self.0 {
                resolver.set(key, value);
            }
            Ok(())
        }
    }

    fn test_flags() -> FlagSet {
        let mut flags = FlagSet::new();
        flags.string("reporter.type", "grpc", "Reporter type to use");
        flags.string("agent.tags", "", "Agent tags");
        flags
    }

    #[test]
    fn test_defaults_returned_when_no_source_sets_key() {
        let resolver = Resolver::new(&test_flags());
        assert_eq!(resolver.get_string("reporter.type"), "grpc");
        assert_eq!(resolver.get_string("agent.tags"), "");
    }

    #[test]
    fn test_unregistered_key_resolves_to_empty_string() {
        let resolver = Resolver::new(&test_flags());
        assert_eq!(resolver.get_string("no.such.key"), "");
    }

    #[test]
    fn test_set_overrides_default() {
        let mut resolver = Resolver::new(&test_flags());
        resolver.set("reporter.type", "http");
        assert_eq!(resolver.get_string("reporter.type"), "http");
    }

    #[test]
    fn test_later_source_overrides_earlier_source() {
        let resolver = ResolverBuilder::default()
            .add_source(Box::new(MapConfigSource(vec![
                ("reporter.type", "http"),
                ("agent.tags", "a=1"),
            ])))
            .add_source(Box::new(MapConfigSource(vec![("reporter.type", "grpc")])))
            .build(&test_flags())
            .unwrap();

        assert_eq!(resolver.get_string("reporter.type"), "grpc");
        assert_eq!(resolver.get_string("agent.tags"), "a=1");
    }

    #[test]
    fn test_registered_keys_come_from_flag_set() {
        let resolver = Resolver::new(&test_flags());
        let mut keys = resolver.registered_keys();
        keys.sort();
        assert_eq!(keys, vec!["agent.tags", "reporter.type"]);
    }
}
