// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Environment variable configuration layer.

use std::env;

use crate::config::{ConfigError, ConfigSource, Resolver};

/// Loads registered keys from the process environment.
///
/// A dotted key maps to its environment variable by uppercasing and turning
/// `.` and `-` into `_`, so `reporter.type` is read from `REPORTER_TYPE`.
/// Variables that are unset or empty leave the lower layers untouched.
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn load(&self, resolver: &mut Resolver) -> Result<(), ConfigError> {
        for key in resolver.registered_keys() {
            if let Ok(value) = env::var(env_var_name(&key)) {
                if !value.is_empty() {
                    resolver.set(&key, &value);
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn env_var_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    use super::*;
    use crate::config::flags::FlagSet;
    use crate::config::Resolver;

    fn test_flags() -> FlagSet {
        let mut flags = FlagSet::new();
        flags.string("reporter.type", "grpc", "Reporter type to use");
        flags.string("agent.tags", "", "Agent tags");
        flags
    }

    #[test]
    fn test_env_var_name_mapping() {
        assert_eq!(env_var_name("reporter.type"), "REPORTER_TYPE");
        assert_eq!(env_var_name("agent.tags"), "AGENT_TAGS");
        assert_eq!(env_var_name("some-key.sub-key"), "SOME_KEY_SUB_KEY");
    }

    #[test]
    #[serial]
    fn test_set_variable_overrides_default() {
        env::set_var("REPORTER_TYPE", "http");
        let mut resolver = Resolver::new(&test_flags());
        EnvConfigSource.load(&mut resolver).unwrap();
        assert_eq!(resolver.get_string("reporter.type"), "http");
        env::remove_var("REPORTER_TYPE");
    }

    #[test]
    #[serial]
    fn test_empty_variable_is_ignored() {
        env::set_var("REPORTER_TYPE", "");
        let mut resolver = Resolver::new(&test_flags());
        EnvConfigSource.load(&mut resolver).unwrap();
        assert_eq!(resolver.get_string("reporter.type"), "grpc");
        env::remove_var("REPORTER_TYPE");
    }

    #[test]
    #[serial]
    fn test_unset_variable_keeps_lower_layer() {
        env::remove_var("AGENT_TAGS");
        let mut resolver = Resolver::new(&test_flags());
        resolver.set("agent.tags", "a=1");
        EnvConfigSource.load(&mut resolver).unwrap();
        assert_eq!(resolver.get_string("agent.tags"), "a=1");
    }
}
