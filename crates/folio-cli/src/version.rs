// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information and version utilities.

use folio_common_version::BuildInfo;

/// Format version info for display.
pub fn format_version_info() -> String {
	BuildInfo::current().display()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_info_has_platform() {
		assert!(format_version_info().contains("Platform:"));
	}
}
