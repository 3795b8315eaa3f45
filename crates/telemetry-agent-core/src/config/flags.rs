// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Flag registry for the agent's configuration surface.
//!
//! Subsystems declare their string-typed flags (name, default, help text)
//! into a shared [`FlagSet`] before any configuration source is read. The
//! flag set then builds the actual `clap` command used to parse process
//! arguments, and [`FlagConfigSource`] feeds values given explicitly on the
//! command line back into the resolver as the highest-priority layer.

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};

use crate::config::{ConfigError, ConfigSource, Resolver};

/// A single string-typed flag declaration.
#[derive(Debug, Clone)]
pub struct Flag {
    name: String,
    default: String,
    help: String,
}

impl Flag {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn default(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Insertion-ordered registry of flag declarations.
///
/// Registering the same flag name twice is a programming error and panics.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    #[must_use]
    pub fn new() -> Self {
        FlagSet::default()
    }

    /// Declare a string flag with a default value and help text.
    pub fn string(&mut self, name: &str, default: &str, help: impl Into<String>) {
        assert!(
            self.flags.iter().all(|flag| flag.name != name),
            "flag {name} registered twice"
        );
        self.flags.push(Flag {
            name: name.to_string(),
            default: default.to_string(),
            help: help.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Build the `clap` command for this flag set.
    ///
    /// Every flag becomes a `--name=value` style long option carrying its
    /// declared default and help text.
    #[must_use]
    pub fn to_command(&self, name: impl Into<clap::builder::Str>) -> Command {
        let mut command = Command::new(name);
        for flag in &self.flags {
            command = command.arg(
                Arg::new(flag.name.clone())
                    .long(flag.name.clone())
                    .value_name("value")
                    .num_args(1)
                    .default_value(flag.default.clone())
                    .help(flag.help.clone()),
            );
        }
        command
    }
}

/// Configuration layer holding values given explicitly on the command line.
///
/// Flag defaults are deliberately not loaded here; they already live in the
/// resolver's defaults layer, and treating them as explicit values would let
/// them shadow the environment and file layers below.
pub struct FlagConfigSource {
    matches: ArgMatches,
}

impl FlagConfigSource {
    #[must_use]
    pub fn new(matches: ArgMatches) -> Self {
        FlagConfigSource { matches }
    }
}

impl ConfigSource for FlagConfigSource {
    fn load(&self, resolver: &mut Resolver) -> Result<(), ConfigError> {
        for key in resolver.registered_keys() {
            if !self.matches.try_contains_id(&key).unwrap_or(false) {
                continue;
            }
            if self.matches.value_source(&key) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(value) = self.matches.get_one::<String>(&key) {
                if !value.is_empty() {
                    resolver.set(&key, value);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Resolver;

    fn test_flags() -> FlagSet {
        let mut flags = FlagSet::new();
        flags.string("reporter.type", "grpc", "Reporter type to use");
        flags.string("agent.tags", "", "Agent tags");
        flags
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_registration_panics() {
        let mut flags = FlagSet::new();
        flags.string("reporter.type", "grpc", "first");
        flags.string("reporter.type", "http", "second");
    }

    #[test]
    fn test_command_parses_long_options() {
        let flags = test_flags();
        let matches = flags
            .to_command("agent")
            .try_get_matches_from(["agent", "--reporter.type=http"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("reporter.type").map(String::as_str),
            Some("http")
        );
    }

    #[test]
    fn test_command_carries_defaults() {
        let flags = test_flags();
        let matches = flags
            .to_command("agent")
            .try_get_matches_from(["agent"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("reporter.type").map(String::as_str),
            Some("grpc")
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let flags = test_flags();
        let result = flags
            .to_command("agent")
            .try_get_matches_from(["agent", "--no.such.flag=1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_loads_only_explicit_values() {
        let flags = test_flags();
        let matches = flags
            .to_command("agent")
            .try_get_matches_from(["agent", "--agent.tags=a=1"])
            .unwrap();

        let mut resolver = Resolver::new(&flags);
        resolver.set("reporter.type", "http"); // stands in for a lower layer
        FlagConfigSource::new(matches).load(&mut resolver).unwrap();

        // reporter.type was not given on the command line, so its clap
        // default must not shadow the lower layer.
        assert_eq!(resolver.get_string("reporter.type"), "http");
        assert_eq!(resolver.get_string("agent.tags"), "a=1");
    }

    #[test]
    fn test_explicit_flag_overrides_lower_layer() {
        let flags = test_flags();
        let matches = flags
            .to_command("agent")
            .try_get_matches_from(["agent", "--reporter.type=http"])
            .unwrap();

        let mut resolver = Resolver::new(&flags);
        resolver.set("reporter.type", "grpc");
        FlagConfigSource::new(matches).load(&mut resolver).unwrap();

        assert_eq!(resolver.get_string("reporter.type"), "http");
    }
}
