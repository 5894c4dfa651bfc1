// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Repository listing types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account name left in freshly scaffolded page configs.
pub const PLACEHOLDER_ACCOUNT: &str = "YOUR_GITHUB_USERNAME";

/// A configured GitHub account whose public repositories are showcased.
///
/// The unconfigured state is `Option<AccountId>::None`; construct through
/// [`AccountId::configured`] so the placeholder never reaches the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
	/// Returns `None` for an empty value or the placeholder sentinel.
	///
	/// Anything else is passed through untouched; GitHub decides whether the
	/// name exists.
	pub fn configured(raw: impl AsRef<str>) -> Option<Self> {
		let trimmed = raw.as_ref().trim();
		if trimmed.is_empty() || trimmed == PLACEHOLDER_ACCOUNT {
			None
		} else {
			Some(Self(trimmed.to_string()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for AccountId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// One entry of `GET /users/{account}/repos`.
///
/// Only the fields the cards need are decoded; GitHub sends many more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
	/// Repository name.
	pub name: String,
	/// Free-form description (null when unset).
	#[serde(default)]
	pub description: Option<String>,
	/// Browser URL of the repository page.
	pub html_url: String,
	/// Last update, ISO-8601.
	pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn account_id_rejects_placeholder_and_blank() {
		assert!(AccountId::configured(PLACEHOLDER_ACCOUNT).is_none());
		assert!(AccountId::configured("").is_none());
		assert!(AccountId::configured("   ").is_none());
	}

	#[test]
	fn account_id_trims_and_keeps_value() {
		let id = AccountId::configured("  octocat ").unwrap();
		assert_eq!(id.as_str(), "octocat");
		assert_eq!(id.to_string(), "octocat");
	}

	#[test]
	fn repository_deserializes_github_payload() {
		let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": "This your first repo!",
            "html_url": "https://github.com/octocat/Hello-World",
            "updated_at": "2011-01-26T19:14:43Z",
            "stargazers_count": 80
        }"#;

		let repo: RepositorySummary = serde_json::from_str(json).unwrap();
		assert_eq!(repo.name, "Hello-World");
		assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
		assert_eq!(repo.html_url, "https://github.com/octocat/Hello-World");
		assert_eq!(repo.updated_at.to_rfc3339(), "2011-01-26T19:14:43+00:00");
	}

	#[test]
	fn repository_deserializes_with_null_description() {
		let json = r#"{
            "name": "dotfiles",
            "description": null,
            "html_url": "https://github.com/octocat/dotfiles",
            "updated_at": "2024-03-01T08:00:00Z"
        }"#;

		let repo: RepositorySummary = serde_json::from_str(json).unwrap();
		assert!(repo.description.is_none());
	}

	#[test]
	fn repository_rejects_bad_timestamp() {
		let json = r#"{
            "name": "broken",
            "description": null,
            "html_url": "https://github.com/octocat/broken",
            "updated_at": "yesterday"
        }"#;

		assert!(serde_json::from_str::<RepositorySummary>(json).is_err());
	}
}
