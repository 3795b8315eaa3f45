// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment mode of the agent process.
//!
//! The mode is fixed at process start and passed explicitly into the
//! configuration code rather than read from an ambient global, so the
//! precedence logic stays testable without manipulating process state.

use serde::{Deserialize, Serialize};

/// How the agent process is deployed.
///
/// In combined (all-in-one) mode the agent and the collector run as a single
/// process and tag configuration is owned by the collector side; the agent
/// therefore never exposes its own tag flags there. In standalone mode the
/// agent is an independent process and owns its tag configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    /// Agent and collector run as one process.
    Combined,
    /// The agent runs as an independent process.
    Standalone,
}

impl DeploymentMode {
    /// Returns true if agent and collector share a single process.
    pub const fn is_combined(self) -> bool {
        matches!(self, Self::Combined)
    }

    /// Returns true if the agent runs on its own.
    pub const fn is_standalone(self) -> bool {
        matches!(self, Self::Standalone)
    }

    /// Parse from an environment variable string.
    ///
    /// Accepts: "combined", "standalone"
    /// Aliases: "all_in_one", "all-in-one", "agent"
    pub fn from_env_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "combined" | "all_in_one" | "all-in-one" => Some(Self::Combined),
            "standalone" | "agent" => Some(Self::Standalone),
            _ => None,
        }
    }
}

impl Default for DeploymentMode {
    fn default() -> Self {
        Self::Standalone
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combined => write!(f, "combined"),
            Self::Standalone => write!(f, "standalone"),
        }
    }
}
