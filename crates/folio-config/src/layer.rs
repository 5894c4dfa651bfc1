// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{ContactConfigLayer, GithubConfigLayer, LoggingConfigLayer};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfigLayer {
	#[serde(default)]
	pub github: Option<GithubConfigLayer>,
	#[serde(default)]
	pub contact: Option<ContactConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl FolioConfigLayer {
	/// Overlay `other` on top of `self`; values present in `other` win.
	pub fn merge(&mut self, other: Self) {
		if let Some(other_github) = other.github {
			self.github
				.get_or_insert_with(Default::default)
				.merge(other_github);
		}
		if let Some(other_contact) = other.contact {
			self.contact
				.get_or_insert_with(Default::default)
				.merge(other_contact);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}
