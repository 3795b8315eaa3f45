// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! YAML file configuration layer.
//!
//! Configuration files use nested mappings that flatten to the same dotted
//! keys the flag surface declares:
//!
//! ```yaml
//! reporter:
//!   type: http
//! agent:
//!   tags: team=platform,zone=${ZONE:us-east-1}
//! ```
//!
//! Files are loaded through the Figment configuration system with its YAML
//! provider. A missing file is not an error; the layer simply contributes
//! nothing.

use std::path::PathBuf;

use figment::providers::{Format, Yaml};
use figment::Figment;
use serde_json::Value;

use crate::config::{ConfigError, ConfigSource, Resolver};

/// Loads an optional YAML configuration file.
pub struct YamlConfigSource {
    pub path: PathBuf,
}

impl ConfigSource for YamlConfigSource {
    fn load(&self, resolver: &mut Resolver) -> Result<(), ConfigError> {
        if !self.path.exists() {
            return Ok(());
        }
        let root: Value = Figment::new()
            .merge(Yaml::file_exact(&self.path))
            .extract()
            .map_err(|err| ConfigError::ParseError(err.to_string()))?;
        match root {
            Value::Object(map) => flatten_map("", &map, resolver),
            Value::Null => Ok(()),
            _ => Err(ConfigError::ParseError(format!(
                "root of {} must be a mapping",
                self.path.display()
            ))),
        }
    }
}

fn flatten_map(
    prefix: &str,
    map: &serde_json::Map<String, Value>,
    resolver: &mut Resolver,
) -> Result<(), ConfigError> {
    for (name, value) in map {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::Object(nested) => flatten_map(&key, nested, resolver)?,
            Value::Null => {}
            Value::String(s) => {
                // Empty strings mean "not configured", same as every layer.
                if !s.is_empty() {
                    resolver.set(&key, s);
                }
            }
            Value::Bool(b) => resolver.set(&key, &b.to_string()),
            Value::Number(n) => resolver.set(&key, &n.to_string()),
            Value::Array(_) => return Err(ConfigError::UnsupportedField(key)),
        }
    }
    Ok(())
}
