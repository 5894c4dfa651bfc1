// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML escaping for remote-controlled text.

use std::borrow::Cow;

const METACHARACTERS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape HTML metacharacters so the text is safe as element content or as a
/// double- or single-quoted attribute value.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
	if !input.contains(METACHARACTERS) {
		return Cow::Borrowed(input);
	}

	let mut escaped = String::with_capacity(input.len() + 16);
	for ch in input.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	Cow::Owned(escaped)
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// Escaped output never contains a raw markup boundary.
		#[test]
		fn output_has_no_raw_boundaries(input in ".*") {
			let escaped = escape_html(&input);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
			prop_assert!(!escaped.contains('\''));
		}

		/// Every ampersand in the output starts one of the produced entities.
		#[test]
		fn ampersands_only_start_entities(input in ".*") {
			let escaped = escape_html(&input);
			for (idx, _) in escaped.match_indices('&') {
				let rest = &escaped[idx..];
				prop_assert!(
					rest.starts_with("&amp;")
						|| rest.starts_with("&lt;")
						|| rest.starts_with("&gt;")
						|| rest.starts_with("&quot;")
						|| rest.starts_with("&#39;")
				);
			}
		}
	}
}
