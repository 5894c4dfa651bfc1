// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the repository listing client.

use thiserror::Error;

/// Errors that can occur while listing an account's repositories.
///
/// Every variant collapses into the same user-visible failure state; the
/// distinction only reaches the diagnostic log.
#[derive(Debug, Error)]
pub enum RepoFetchError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// GitHub answered with a non-success status.
	#[error("GitHub API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Body was not a JSON array of repository records.
	#[error("Invalid response from GitHub: {0}")]
	InvalidResponse(String),

	/// Configuration error.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl RepoFetchError {
	/// Create an API error from status code and message.
	pub fn api_error(status: u16, message: impl Into<String>) -> Self {
		Self::ApiError {
			status,
			message: message.into(),
		}
	}

	/// Short failure class used as a structured log field.
	pub fn kind(&self) -> &'static str {
		match self {
			RepoFetchError::Network(_) => "network",
			RepoFetchError::ApiError { .. } => "status",
			RepoFetchError::InvalidResponse(_) => "malformed_body",
			RepoFetchError::Config(_) => "config",
		}
	}
}
