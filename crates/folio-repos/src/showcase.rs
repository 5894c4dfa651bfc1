// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fetch-and-render flow for the projects section.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info};

use crate::client::RepoClient;
use crate::config::FAILURE_MESSAGE;
use crate::error::RepoFetchError;
use crate::render::{render_card, unconfigured_markup};
use crate::select::select_recent;
use crate::target::RenderTarget;
use crate::types::{AccountId, RepositorySummary};

/// State a render target is left in after [`RepoShowcase::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
	/// Cards rendered, loading hidden, grid shown.
	Rendered { count: usize },
	/// Loading text replaced by [`FAILURE_MESSAGE`], grid left hidden.
	Failed,
	/// A newer fetch started meanwhile; the target was not touched.
	Stale,
}

/// Result of one listing request, tagged with the generation it belongs to.
#[derive(Debug)]
pub struct FetchOutcome {
	generation: u64,
	account: AccountId,
	result: Result<Vec<RepositorySummary>, RepoFetchError>,
}

impl FetchOutcome {
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn account(&self) -> &AccountId {
		&self.account
	}

	pub fn result(&self) -> &Result<Vec<RepositorySummary>, RepoFetchError> {
		&self.result
	}
}

/// Drives fetches and applies their outcomes to a [`RenderTarget`].
///
/// Every [`fetch`](Self::fetch) takes a new generation; [`apply`](Self::apply)
/// drops outcomes from older generations, so overlapping triggers never let
/// a slow response overwrite a newer one.
#[derive(Debug)]
pub struct RepoShowcase {
	client: RepoClient,
	generation: AtomicU64,
}

impl RepoShowcase {
	pub fn new(client: RepoClient) -> Self {
		Self {
			client,
			generation: AtomicU64::new(0),
		}
	}

	pub fn client(&self) -> &RepoClient {
		&self.client
	}

	/// Generation of the most recently started fetch.
	pub fn current_generation(&self) -> u64 {
		self.generation.load(Ordering::SeqCst)
	}

	/// Start a new generation and list the account's repositories.
	pub async fn fetch(&self, account: &AccountId) -> FetchOutcome {
		let generation = self
			.generation
			.fetch_add(1, Ordering::SeqCst)
			.wrapping_add(1);
		let result = self.client.list_user_repos(account).await;

		FetchOutcome {
			generation,
			account: account.clone(),
			result,
		}
	}

	/// Apply a fetch outcome to `target`.
	///
	/// Failures are logged here and surface only through the target's loading
	/// text; a grid revealed by an earlier render is hidden again.
	pub fn apply<T: RenderTarget + ?Sized>(
		&self,
		outcome: FetchOutcome,
		target: &mut T,
	) -> RenderState {
		let current = self.current_generation();
		if outcome.generation != current {
			debug!(
				account = %outcome.account,
				generation = outcome.generation,
				current,
				"discarding stale repository listing"
			);
			return RenderState::Stale;
		}

		match outcome.result {
			Ok(repos) => {
				let fetched = repos.len();
				let selected = select_recent(repos, self.client.config().max_cards());
				let cards: Vec<String> = selected.iter().map(render_card).collect();
				let count = cards.len();

				target.replace_cards(cards);
				target.hide_loading();
				target.show_grid();

				info!(
					account = %outcome.account,
					fetched,
					rendered = count,
					"rendered repository cards"
				);
				RenderState::Rendered { count }
			}
			Err(e) => {
				error!(
					account = %outcome.account,
					kind = e.kind(),
					error = %e,
					"failed to load repositories"
				);
				target.set_loading_text(FAILURE_MESSAGE);
				target.show_loading();
				target.hide_grid();
				RenderState::Failed
			}
		}
	}

	/// Fetch the account's repositories and render them into `target`.
	///
	/// Never fails outward; see [`RenderState`] for what the target shows.
	pub async fn fetch_and_render<T: RenderTarget + ?Sized>(
		&self,
		account: &AccountId,
		target: &mut T,
	) {
		let outcome = self.fetch(account).await;
		self.apply(outcome, target);
	}
}

/// Page-initialization entry point for the projects section.
///
/// - No root on the page: nothing happens and no request is made.
/// - No account configured: the root gets an instructional hint instead.
/// - Otherwise: [`RepoShowcase::fetch_and_render`].
pub async fn init_projects_section<T: RenderTarget + ?Sized>(
	root: Option<&mut T>,
	account: Option<&AccountId>,
	showcase: &RepoShowcase,
) {
	let Some(root) = root else {
		debug!("no projects root on page, skipping repository fetch");
		return;
	};

	match account {
		Some(account) => showcase.fetch_and_render(account, root).await,
		None => {
			info!("GitHub account not configured, rendering setup hint");
			root.replace_root_content(unconfigured_markup());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::RepoShowcaseConfig;
	use crate::target::ProjectsSection;
	use chrono::{TimeZone, Utc};

	fn showcase() -> RepoShowcase {
		let config = RepoShowcaseConfig::default()
			.try_with_base_url("http://127.0.0.1:9")
			.unwrap();
		RepoShowcase::new(RepoClient::with_http_client(config, reqwest::Client::new()))
	}

	fn account() -> AccountId {
		AccountId::configured("octocat").unwrap()
	}

	fn repo(name: &str, day: u32) -> RepositorySummary {
		RepositorySummary {
			name: name.to_string(),
			description: None,
			html_url: format!("https://github.com/octocat/{name}"),
			updated_at: Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
		}
	}

	fn outcome(
		showcase: &RepoShowcase,
		result: Result<Vec<RepositorySummary>, RepoFetchError>,
	) -> FetchOutcome {
		FetchOutcome {
			generation: showcase.generation.fetch_add(1, Ordering::SeqCst) + 1,
			account: account(),
			result,
		}
	}

	#[test]
	fn apply_success_reveals_grid() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();
		let repos = (1..=8).map(|day| repo(&format!("r{day}"), day)).collect();

		let state = showcase.apply(outcome(&showcase, Ok(repos)), &mut section);

		assert_eq!(state, RenderState::Rendered { count: 6 });
		assert_eq!(section.cards().len(), 6);
		assert!(section.cards()[0].contains("<h3>r8</h3>"));
		assert!(section.cards()[5].contains("<h3>r3</h3>"));
		assert!(!section.is_loading_visible());
		assert!(section.is_grid_visible());
	}

	#[test]
	fn apply_failure_sets_message_and_keeps_grid_hidden() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();

		let state = showcase.apply(
			outcome(&showcase, Err(RepoFetchError::api_error(404, "Not Found"))),
			&mut section,
		);

		assert_eq!(state, RenderState::Failed);
		assert_eq!(section.loading_text(), FAILURE_MESSAGE);
		assert!(section.is_loading_visible());
		assert!(!section.is_grid_visible());
		assert!(section.cards().is_empty());
	}

	#[test]
	fn failure_after_success_hides_grid_and_shows_message() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();

		showcase.apply(outcome(&showcase, Ok(vec![repo("a", 1)])), &mut section);
		assert!(section.is_grid_visible());

		let state = showcase.apply(
			outcome(&showcase, Err(RepoFetchError::api_error(500, "boom"))),
			&mut section,
		);

		assert_eq!(state, RenderState::Failed);
		assert_eq!(section.loading_text(), FAILURE_MESSAGE);
		assert!(section.is_loading_visible());
		assert!(!section.is_grid_visible());

		let html = section.to_html();
		assert!(html.contains("<div class=\"loading\">Unable to load repositories.</div>"));
		assert!(html.contains(
			"<div id=\"projects-grid\" class=\"projects-grid\" style=\"display:none\">"
		));
	}

	#[test]
	fn apply_never_renders_more_than_limit() {
		let config = RepoShowcaseConfig::default()
			.try_with_base_url("http://127.0.0.1:9")
			.unwrap()
			.with_max_cards(10);
		let client = RepoClient::with_http_client(config, reqwest::Client::new());
		let showcase = RepoShowcase::new(client);
		let mut section = ProjectsSection::new();
		let repos = (1..=8).map(|day| repo(&format!("r{day}"), day)).collect();

		let state = showcase.apply(outcome(&showcase, Ok(repos)), &mut section);

		assert_eq!(state, RenderState::Rendered { count: 6 });
		assert_eq!(section.cards().len(), 6);
	}

	#[test]
	fn stale_outcome_leaves_target_untouched() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();

		let older = outcome(&showcase, Ok(vec![repo("old", 1)]));
		let newer = outcome(&showcase, Ok(vec![repo("new", 2)]));

		assert_eq!(showcase.apply(older, &mut section), RenderState::Stale);
		assert_eq!(section, ProjectsSection::new());

		assert_eq!(
			showcase.apply(newer, &mut section),
			RenderState::Rendered { count: 1 }
		);
		assert!(section.cards()[0].contains("<h3>new</h3>"));
	}

	#[test]
	fn stale_failure_does_not_clobber_rendered_cards() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();

		let older = outcome(&showcase, Err(RepoFetchError::InvalidResponse("eof".to_string())));
		let newer = outcome(&showcase, Ok(vec![repo("new", 2)]));

		showcase.apply(newer, &mut section);
		assert_eq!(showcase.apply(older, &mut section), RenderState::Stale);
		assert_eq!(section.cards().len(), 1);
		assert!(section.is_grid_visible());
	}

	#[tokio::test]
	async fn init_without_root_is_a_no_op() {
		let showcase = showcase();
		init_projects_section::<ProjectsSection>(None, Some(&account()), &showcase).await;
		assert_eq!(showcase.current_generation(), 0);
	}

	#[tokio::test]
	async fn init_without_account_renders_hint_and_skips_fetch() {
		let showcase = showcase();
		let mut section = ProjectsSection::new();

		init_projects_section(Some(&mut section), None, &showcase).await;

		assert_eq!(showcase.current_generation(), 0);
		assert_eq!(section.root_override(), Some(unconfigured_markup().as_str()));
	}
}
