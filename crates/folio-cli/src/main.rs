// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `folio` - tooling for the portfolio site.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod contact;
mod projects;
mod version;

/// Folio - render the projects showcase and contact links for a portfolio site.
#[derive(Parser, Debug)]
#[command(name = "folio", about = "Portfolio site tooling", version)]
struct Args {
	/// Config file (defaults to $XDG_CONFIG_HOME/folio/config.toml)
	#[arg(long, global = true, env = "FOLIO_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Render the projects section from a GitHub account's public repositories
	Projects(projects::ProjectsArgs),
	/// Validate a contact form and print the mailto link for it
	Contact(contact::ContactArgs),
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	let config = match &args.config {
		Some(path) => folio_config::load_config_with_file(path)?,
		None => folio_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	match args.command {
		Command::Projects(projects_args) => projects::run(projects_args, &config).await,
		Command::Contact(contact_args) => contact::run(contact_args, &config),
		Command::Version => Ok(()),
	}
}
