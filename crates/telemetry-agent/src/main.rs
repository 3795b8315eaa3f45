// Copyright 2025-Present the telemetry-agent contributors
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use telemetry_agent_core::config::env::EnvConfigSource;
use telemetry_agent_core::config::flags::{FlagConfigSource, FlagSet};
use telemetry_agent_core::config::yaml::YamlConfigSource;
use telemetry_agent_core::config::ResolverBuilder;
use telemetry_agent_core::deployment_mode::DeploymentMode;
use telemetry_agent_core::reporter;

/// Flag naming an optional YAML configuration file.
const CONFIG_FILE: &str = "config";

fn main() {
    let log_level = env::var("AGENT_LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    #[allow(clippy::expect_used)]
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(log_level).expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .finish();
    #[allow(clippy::expect_used)]
    tracing::subscriber::set_global_default(subscriber)
        .expect("global default subscriber already set");

    // Fixed for the lifetime of the process; everything downstream receives
    // it as an explicit parameter.
    let mode = env::var("AGENT_MODE")
        .ok()
        .and_then(|val| DeploymentMode::from_env_str(&val))
        .unwrap_or_default();
    debug!(%mode, "starting telemetry agent");

    let mut flags = FlagSet::new();
    flags.string(
        CONFIG_FILE,
        "",
        "Path to an optional YAML configuration file",
    );
    reporter::add_flags(&mut flags, mode);

    let matches = flags.to_command("telemetry-agent").get_matches();

    let mut builder = ResolverBuilder::default();
    if let Some(path) = matches
        .get_one::<String>(CONFIG_FILE)
        .filter(|path| !path.is_empty())
    {
        builder = builder.add_source(Box::new(YamlConfigSource {
            path: PathBuf::from(path.as_str()),
        }));
    }
    builder = builder
        .add_source(Box::new(EnvConfigSource))
        .add_source(Box::new(FlagConfigSource::new(matches)));

    let resolver = match builder.build(&flags) {
        Ok(resolver) => resolver,
        Err(err) => {
            error!("Unable to load configuration: {err}");
            process::exit(1);
        }
    };

    let options = reporter::Options::from_resolver(&resolver, mode);
    info!(
        reporter_type = %options.reporter_type,
        %mode,
        "resolved reporter configuration"
    );
    if let Some(tags) = &options.agent_tags {
        info!(count = tags.len(), "agent tags attached to forwarded records");
    }

    // Transport wiring. The actual gRPC/HTTP clients live behind this
    // selection and are instantiated from the resolved options.
    match options.reporter_type.as_str() {
        reporter::GRPC => info!("selected gRPC reporter transport"),
        reporter::HTTP => info!("selected HTTP reporter transport"),
        other => {
            error!(reporter_type = other, "unsupported reporter type");
            process::exit(1);
        }
    }
}
