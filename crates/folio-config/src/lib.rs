// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Folio tooling.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Consistent environment variable naming (`FOLIO_*`)
//! - Resolution of the GitHub account into `Option<AccountId>`, so the
//!   placeholder username never leaves this crate
//!
//! # Usage
//!
//! ```ignore
//! use folio_config::load_config;
//!
//! let config = load_config()?;
//! match &config.github.account {
//!     Some(account) => println!("showcasing {account}"),
//!     None => println!("no account configured"),
//! }
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::FolioConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct FolioConfig {
	pub github: GithubConfig,
	pub contact: ContactConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`FOLIO_*`)
/// 2. Config file (`$XDG_CONFIG_HOME/folio/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<FolioConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> =
		vec![Box::new(DefaultsSource), Box::new(EnvSource::process())];
	if let Some(user) = TomlSource::user() {
		sources.push(Box::new(user));
	}
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<FolioConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::process()),
	])
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<FolioConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = FolioConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

fn finalize(layer: FolioConfigLayer) -> Result<FolioConfig, ConfigError> {
	let github = layer.github.unwrap_or_default().finalize()?;
	let contact = layer.contact.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		github_configured = github.account.is_some(),
		base_url = %github.showcase.base_url(),
		max_cards = github.showcase.max_cards(),
		contact_configured = contact.recipient.is_some(),
		"Folio configuration loaded"
	);

	Ok(FolioConfig {
		github,
		contact,
		logging,
	})
}
