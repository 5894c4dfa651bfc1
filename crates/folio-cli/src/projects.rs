// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `folio projects`: render the repository showcase section.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use folio_config::FolioConfig;
use folio_repos::{init_projects_section, AccountId, ProjectsSection, RepoClient, RepoShowcase};
use tracing::info;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
	/// GitHub account to showcase (overrides github.username)
	#[arg(long, short)]
	pub user: Option<String>,

	/// Write the section HTML here instead of stdout
	#[arg(long, short)]
	pub output: Option<PathBuf>,
}

/// The account named on the command line wins over the configured one.
fn resolve_account(args: &ProjectsArgs, config: &FolioConfig) -> Option<AccountId> {
	match &args.user {
		Some(user) => AccountId::configured(user),
		None => config.github.account.clone(),
	}
}

pub async fn run(args: ProjectsArgs, config: &FolioConfig) -> anyhow::Result<()> {
	let account = resolve_account(&args, config);
	let client = RepoClient::new(config.github.showcase.clone())
		.context("failed to build HTTP client")?;
	let showcase = RepoShowcase::new(client);

	let mut section = ProjectsSection::new();
	init_projects_section(Some(&mut section), account.as_ref(), &showcase).await;
	let html = section.to_html();

	match &args.output {
		Some(path) => {
			std::fs::write(path, &html)
				.with_context(|| format!("failed to write {}", path.display()))?;
			info!(path = %path.display(), cards = section.cards().len(), "wrote projects section");
		}
		None => print!("{html}"),
	}

	Ok(())
}
