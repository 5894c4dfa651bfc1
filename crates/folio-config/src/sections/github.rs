// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GitHub repository showcase section.

use folio_repos::config::DEFAULT_MAX_CARDS;
use folio_repos::{AccountId, RepoShowcaseConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfigLayer {
	pub username: Option<String>,
	pub base_url: Option<String>,
	pub max_cards: Option<usize>,
}

impl GithubConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.username.is_some() {
			self.username = other.username;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.max_cards.is_some() {
			self.max_cards = other.max_cards;
		}
	}

	pub fn finalize(self) -> Result<GithubConfig, ConfigError> {
		let mut showcase = RepoShowcaseConfig::default();

		if let Some(base_url) = self.base_url {
			showcase = showcase
				.try_with_base_url(&base_url)
				.map_err(|e| ConfigError::InvalidValue {
					key: "github.base_url".to_string(),
					message: e.to_string(),
				})?;
		}
		if let Some(max_cards) = self.max_cards {
			if max_cards > DEFAULT_MAX_CARDS {
				return Err(ConfigError::InvalidValue {
					key: "github.max_cards".to_string(),
					message: format!("{max_cards} exceeds the limit of {DEFAULT_MAX_CARDS} cards"),
				});
			}
			showcase = showcase.with_max_cards(max_cards);
		}

		Ok(GithubConfig {
			account: self.username.and_then(AccountId::configured),
			showcase,
		})
	}
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
	/// `None` when unset, blank, or still the scaffold placeholder.
	pub account: Option<AccountId>,
	pub showcase: RepoShowcaseConfig,
}
