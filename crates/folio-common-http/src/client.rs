// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client with consistent User-Agent header.

use folio_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the standard Folio User-Agent header.
///
/// No request timeout is configured; the transport default applies.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

/// Creates a new HTTP client builder with the standard Folio User-Agent header.
///
/// Use this when you need to customize the client (e.g., set a timeout).
///
/// # Example
/// ```ignore
/// let client = folio_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Folio User-Agent string.
///
/// Format: `folio/{platform}/{git_sha}`
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!("folio/{}/{}", info.platform, info.git_sha)
}
