// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Reporter configuration surface and its precedence resolution.
//!
//! The reporter subsystem exposes a transport selector and, in standalone
//! deployments only, two tag keys: a deprecated legacy key kept for backward
//! compatibility and its replacement. When both are set the replacement wins
//! outright; the two values are never merged.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::config::flags::FlagSet;
use crate::config::Resolver;
use crate::deployment_mode::DeploymentMode;
use crate::tags;

/// Configuration key selecting the reporter transport.
pub const REPORTER_TYPE: &str = "reporter.type";
/// Deprecated configuration key for agent tags, kept for backward
/// compatibility. Superseded by [`AGENT_TAGS`].
pub const AGENT_TAGS_DEPRECATED: &str = "reporter.tags";
/// Configuration key for tags added to every record forwarded by this agent.
pub const AGENT_TAGS: &str = "agent.tags";

/// Name of the gRPC reporter transport.
pub const GRPC: &str = "grpc";
/// Name of the HTTP reporter transport.
pub const HTTP: &str = "http";

/// The selected reporter transport, carried verbatim from configuration.
///
/// The value is not validated here; rejecting unknown transports is the job
/// of the wiring step that instantiates the actual reporter client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterType(String);

impl ReporterType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReporterType {
    fn default() -> Self {
        ReporterType(GRPC.to_string())
    }
}

impl From<&str> for ReporterType {
    fn from(value: &str) -> Self {
        ReporterType(value.to_string())
    }
}

impl From<String> for ReporterType {
    fn from(value: String) -> Self {
        ReporterType(value)
    }
}

impl fmt::Display for ReporterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved reporter configuration.
///
/// `agent_tags` of `None` means "not configured": downstream keeps its own
/// unset state, distinct from an explicitly empty mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub reporter_type: ReporterType,
    pub agent_tags: Option<HashMap<String, String>>,
}

/// Declare the reporter flag surface for the given deployment mode.
///
/// The tag keys are only declared in standalone mode. In combined mode tags
/// are owned by the collector side of the process, and declaring a second
/// configuration path here would leave two silently conflicting tag sources.
pub fn add_flags(flags: &mut FlagSet, mode: DeploymentMode) {
    flags.string(
        REPORTER_TYPE,
        GRPC,
        format!("Reporter type to use: {GRPC}, {HTTP}"),
    );
    if mode.is_standalone() {
        flags.string(
            AGENT_TAGS_DEPRECATED,
            "",
            format!("(deprecated) see --{AGENT_TAGS}"),
        );
        flags.string(
            AGENT_TAGS,
            "",
            "One or more tags to be added to every record forwarded by this agent. \
             Ex: key1=value1,key2=${envVar:defaultValue}",
        );
    }
}

impl Options {
    /// Resolve the final reporter options from a populated configuration
    /// source.
    ///
    /// The transport selector is carried verbatim, falling back to gRPC when
    /// unset. Tags follow an overwrite-if-present policy: the deprecated key
    /// is honored only when the replacement key is empty, and setting the
    /// deprecated key always emits one deprecation warning, whether or not
    /// the replacement ends up overriding it.
    #[must_use]
    pub fn from_resolver(resolver: &Resolver, mode: DeploymentMode) -> Options {
        let reporter_type = resolver.get_string(REPORTER_TYPE);
        let mut options = Options {
            reporter_type: if reporter_type.is_empty() {
                ReporterType::default()
            } else {
                ReporterType::from(reporter_type)
            },
            agent_tags: None,
        };
        if mode.is_standalone() {
            let deprecated = resolver.get_string(AGENT_TAGS_DEPRECATED);
            if !deprecated.is_empty() {
                warn!(
                    option = AGENT_TAGS_DEPRECATED,
                    "Using deprecated configuration"
                );
                options.agent_tags = Some(tags::parse_tags(&deprecated));
            }
            let replacement = resolver.get_string(AGENT_TAGS);
            if !replacement.is_empty() {
                options.agent_tags = Some(tags::parse_tags(&replacement));
            }
        }
        options
    }
}
