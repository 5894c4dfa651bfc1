// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Recency selection of fetched repositories.

use crate::types::RepositorySummary;

/// Sort by `updated_at`, newest first, and keep at most `limit` entries.
///
/// The sort is stable: repositories with equal timestamps keep the order
/// GitHub returned them in.
pub fn select_recent(mut repos: Vec<RepositorySummary>, limit: usize) -> Vec<RepositorySummary> {
	repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
	repos.truncate(limit);
	repos
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn repo(name: &str, day: u32) -> RepositorySummary {
		RepositorySummary {
			name: name.to_string(),
			description: None,
			html_url: format!("https://github.com/octocat/{name}"),
			updated_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
		}
	}

	fn names(repos: &[RepositorySummary]) -> Vec<&str> {
		repos.iter().map(|r| r.name.as_str()).collect()
	}

	#[test]
	fn selects_six_latest_of_eight() {
		let repos = vec![
			repo("a", 3),
			repo("b", 8),
			repo("c", 1),
			repo("d", 6),
			repo("e", 2),
			repo("f", 7),
			repo("g", 5),
			repo("h", 4),
		];

		let selected = select_recent(repos, 6);
		assert_eq!(names(&selected), vec!["b", "f", "d", "g", "h", "a"]);
	}

	#[test]
	fn keeps_everything_below_limit() {
		let selected = select_recent(vec![repo("old", 1), repo("new", 2)], 6);
		assert_eq!(names(&selected), vec!["new", "old"]);
	}

	#[test]
	fn empty_input_yields_empty_output() {
		assert!(select_recent(Vec::new(), 6).is_empty());
	}

	#[test]
	fn equal_timestamps_keep_source_order() {
		let repos = vec![repo("first", 5), repo("second", 5), repo("newest", 9), repo("third", 5)];
		let selected = select_recent(repos, 6);
		assert_eq!(names(&selected), vec!["newest", "first", "second", "third"]);
	}
}
