// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and version information for the Folio binaries.
//!
//! Used for the `folio version` output and the outbound `User-Agent` header.

shadow_rs::shadow!(build);

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("FOLIO_PLATFORM");

/// Compile-time build information.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}

	/// Multi-line summary printed by `folio version`.
	pub fn display(&self) -> String {
		format!(
			"Version:  {}\nGit SHA:  {}\nBuilt:    {}\nPlatform: {}",
			self.version, self.git_sha, self.build_timestamp, self.platform
		)
	}
}
