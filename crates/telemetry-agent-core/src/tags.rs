// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsing of tag strings into key/value mappings.

use std::collections::HashMap;
use std::env;

/// Parse a comma-separated tag string into a mapping.
///
/// Each pair has the form `key=value`. A value of the form
/// `${ENV_VAR:default}` resolves the named environment variable, falling back
/// to the default when the variable is unset or empty. Pairs without an `=`
/// are skipped best-effort rather than failing the whole string.
#[must_use]
pub fn parse_tags(raw: &str) -> HashMap<String, String> {
    let mut tags = HashMap::new();
    for pair in raw.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        tags.insert(key.to_string(), resolve_value(value.trim()));
    }
    tags
}

fn resolve_value(value: &str) -> String {
    let Some(reference) = value
        .strip_prefix("${")
        .and_then(|v| v.strip_suffix('}'))
    else {
        return value.to_string();
    };
    let (name, fallback) = match reference.split_once(':') {
        Some((name, fallback)) => (name, fallback),
        None => (reference, ""),
    };
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
