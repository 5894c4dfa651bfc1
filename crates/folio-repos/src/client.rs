// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client for the GitHub repository listing endpoint.

use reqwest::{header::ACCEPT, Client, Url};
use tracing::debug;

use crate::config::RepoShowcaseConfig;
use crate::error::RepoFetchError;
use crate::types::{AccountId, RepositorySummary};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Unauthenticated client for `GET /users/{account}/repos`.
///
/// Single attempt per call: no retry and no explicit timeout.
#[derive(Debug, Clone)]
pub struct RepoClient {
	config: RepoShowcaseConfig,
	http_client: Client,
}

impl RepoClient {
	/// Create a client with the standard Folio HTTP client.
	pub fn new(config: RepoShowcaseConfig) -> Result<Self, RepoFetchError> {
		let http_client = folio_common_http::new_client()?;
		Ok(Self::with_http_client(config, http_client))
	}

	/// Create a client around an existing `reqwest::Client`.
	pub fn with_http_client(config: RepoShowcaseConfig, http_client: Client) -> Self {
		Self {
			config,
			http_client,
		}
	}

	pub fn config(&self) -> &RepoShowcaseConfig {
		&self.config
	}

	/// URL of the first (and only) page of the account's repositories.
	pub fn repos_url(&self, account: &AccountId) -> Result<Url, RepoFetchError> {
		let base = self.config.base_url().as_str().trim_end_matches('/');
		let raw = format!(
			"{base}/users/{}/repos",
			urlencoding::encode(account.as_str())
		);

		let mut url = Url::parse(&raw)
			.map_err(|e| RepoFetchError::Config(format!("Invalid repository URL '{raw}': {e}")))?;
		url
			.query_pairs_mut()
			.append_pair("per_page", &self.config.per_page().to_string());
		Ok(url)
	}

	/// List the public repositories of `account`, in the order GitHub returns them.
	///
	/// # Errors
	///
	/// - [`RepoFetchError::Network`]: transport failure.
	/// - [`RepoFetchError::ApiError`]: non-success status (unknown account,
	///   rate limit, ...).
	/// - [`RepoFetchError::InvalidResponse`]: body is not a repository array.
	#[tracing::instrument(
		skip(self, account),
		fields(account = %account),
		name = "RepoClient::list_user_repos"
	)]
	pub async fn list_user_repos(
		&self,
		account: &AccountId,
	) -> Result<Vec<RepositorySummary>, RepoFetchError> {
		let url = self.repos_url(account)?;
		debug!(url = %url, "fetching public repositories");

		let response = self
			.http_client
			.get(url)
			.header(ACCEPT, GITHUB_ACCEPT)
			.header("X-GitHub-Api-Version", GITHUB_API_VERSION)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(RepoFetchError::api_error(status.as_u16(), body));
		}

		let body = response.text().await?;
		let repos: Vec<RepositorySummary> = serde_json::from_str(&body).map_err(|e| {
			RepoFetchError::InvalidResponse(format!("failed to parse repository list: {e}"))
		})?;

		debug!(count = repos.len(), "received repositories");
		Ok(repos)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn client(base: &str) -> RepoClient {
		let config = RepoShowcaseConfig::default().try_with_base_url(base).unwrap();
		RepoClient::with_http_client(config, Client::new())
	}

	#[test]
	fn repos_url_uses_fixed_template() {
		let account = AccountId::configured("octocat").unwrap();
		let url = client("https://api.github.com").repos_url(&account).unwrap();
		assert_eq!(
			url.as_str(),
			"https://api.github.com/users/octocat/repos?per_page=100"
		);
	}

	#[test]
	fn repos_url_keeps_enterprise_prefix() {
		let account = AccountId::configured("octocat").unwrap();
		let url = client("https://github.example.com/api/v3/")
			.repos_url(&account)
			.unwrap();
		assert_eq!(
			url.as_str(),
			"https://github.example.com/api/v3/users/octocat/repos?per_page=100"
		);
	}

	#[test]
	fn repos_url_encodes_account_segment() {
		let account = AccountId::configured("../admin?x=1").unwrap();
		let url = client("https://api.github.com").repos_url(&account).unwrap();
		assert_eq!(url.path(), "/users/..%2Fadmin%3Fx%3D1/repos");
		assert_eq!(url.query(), Some("per_page=100"));
	}
}
