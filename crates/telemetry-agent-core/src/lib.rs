// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration resolution for the telemetry agent's reporter subsystem.
//!
//! The reporter forwards collected telemetry records to an upstream service
//! over a chosen transport. This crate declares the configuration surface for
//! that subsystem (transport selector plus static agent tags), reads the
//! final values out of a layered configuration source, and materializes them
//! into an immutable [`reporter::Options`] value.
//!
//! # Startup sequence
//!
//! 1. [`reporter::add_flags`] declares the flag surface for the process-wide
//!    [`DeploymentMode`].
//! 2. Configuration sources (YAML file, environment variables, explicit
//!    command-line flags) are layered into a [`Resolver`].
//! 3. [`reporter::Options::from_resolver`] reads the populated resolver once
//!    and hands the resolved options to the transport wiring.
//!
//! All three steps run once, strictly in order, during process startup.

pub mod config;
pub mod deployment_mode;
pub mod reporter;
pub mod tags;

pub use config::{ConfigError, ConfigSource, Resolver, ResolverBuilder};
pub use deployment_mode::DeploymentMode;
