// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration for the repository showcase.

use reqwest::Url;
use tracing::warn;

use crate::error::RepoFetchError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Repositories requested in the single page fetched per render.
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Cards rendered at most.
pub const DEFAULT_MAX_CARDS: usize = 6;

/// Loading indicator text after any fetch failure.
pub const FAILURE_MESSAGE: &str = "Unable to load repositories.";

/// Shown in place of the projects section when no account is configured.
pub const UNCONFIGURED_MESSAGE: &str =
	"Set github.username (or FOLIO_GITHUB_USERNAME) to your GitHub username.";

/// Configuration for [`crate::RepoClient`] and [`crate::RepoShowcase`].
#[derive(Debug, Clone)]
pub struct RepoShowcaseConfig {
	/// Base URL for the GitHub REST API (validated, parsed)
	base_url: Url,

	/// `per_page` query value; pagination beyond the first page is never attempted
	per_page: u8,

	/// Upper bound on rendered cards
	max_cards: usize,
}

impl Default for RepoShowcaseConfig {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			per_page: DEFAULT_PER_PAGE,
			max_cards: DEFAULT_MAX_CARDS,
		}
	}
}

fn default_base_url() -> Url {
	Url::parse(DEFAULT_BASE_URL).expect("default URL is valid")
}

impl RepoShowcaseConfig {
	/// Validate and normalize a base URL.
	///
	/// Requirements:
	/// - Must be a valid URL with a host
	/// - Must use HTTPS, except plain HTTP on a loopback host (local mirrors)
	pub fn validate_base_url(raw: &str) -> Result<Url, RepoFetchError> {
		let url = Url::parse(raw)
			.map_err(|e| RepoFetchError::Config(format!("Invalid GitHub base URL '{raw}': {e}")))?;

		let host = url.host_str().ok_or_else(|| {
			RepoFetchError::Config("GitHub base URL must include a host".to_string())
		})?;

		let loopback = host == "localhost" || host == "127.0.0.1" || host == "[::1]";

		match url.scheme() {
			"https" => Ok(url),
			"http" if loopback => Ok(url),
			scheme => Err(RepoFetchError::Config(format!(
				"GitHub base URL must use https, got '{scheme}'"
			))),
		}
	}

	/// Set a validated base URL, failing on an invalid one.
	pub fn try_with_base_url(mut self, url: &str) -> Result<Self, RepoFetchError> {
		self.base_url = Self::validate_base_url(url)?;
		Ok(self)
	}

	/// Set a custom base URL (GitHub Enterprise or a local mirror).
	///
	/// If validation fails, logs a warning and keeps the previous value.
	pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
		let url_str = url.into();
		match Self::validate_base_url(&url_str) {
			Ok(validated) => self.base_url = validated,
			Err(e) => {
				warn!(
					error = %e,
					url = %url_str,
					"Invalid base_url in with_base_url, keeping previous value"
				);
			}
		}
		self
	}

	/// Set the maximum number of rendered cards.
	///
	/// Values above [`DEFAULT_MAX_CARDS`] are clamped to it.
	pub fn with_max_cards(mut self, max_cards: usize) -> Self {
		if max_cards > DEFAULT_MAX_CARDS {
			warn!(max_cards, limit = DEFAULT_MAX_CARDS, "max_cards above limit, clamping");
		}
		self.max_cards = max_cards.min(DEFAULT_MAX_CARDS);
		self
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn per_page(&self) -> u8 {
		self.per_page
	}

	pub fn max_cards(&self) -> usize {
		self.max_cards
	}
}
