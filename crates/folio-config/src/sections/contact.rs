// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfigLayer {
	pub recipient: Option<String>,
}

impl ContactConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.recipient.is_some() {
			self.recipient = other.recipient;
		}
	}

	pub fn finalize(self) -> ContactConfig {
		ContactConfig {
			recipient: self.recipient.filter(|r| !r.trim().is_empty()),
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
	/// Address the `mailto:` links are sent to.
	pub recipient: Option<String>,
}
