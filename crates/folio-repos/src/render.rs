// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Card markup for a single repository.

use reqwest::Url;

use crate::config::UNCONFIGURED_MESSAGE;
use crate::escape::escape_html;
use crate::types::RepositorySummary;

pub const CARD_CLASS: &str = "project-card reveal visible";
pub const VIEW_LINK_LABEL: &str = "View on GitHub";

/// Render one repository as an `<article>` card.
///
/// Name and description are escaped; a missing description renders as an
/// empty paragraph. The link opens in a new browsing context without opener
/// or referrer access.
pub fn render_card(repo: &RepositorySummary) -> String {
	let name = escape_html(&repo.name);
	let description = escape_html(repo.description.as_deref().unwrap_or_default());
	let href = escape_html(link_target(&repo.html_url));

	format!(
		"<article class=\"{CARD_CLASS}\">\
		 <h3>{name}</h3>\
		 <p class=\"muted\">{description}</p>\
		 <div class=\"card-actions\">\
		 <a class=\"btn small\" href=\"{href}\" \
		 target=\"_blank\" rel=\"noopener noreferrer\">{VIEW_LINK_LABEL}</a>\
		 </div>\
		 </article>"
	)
}

/// Markup substituted for the whole projects section when no account is set.
pub fn unconfigured_markup() -> String {
	format!("<div class=\"muted\">{}</div>", escape_html(UNCONFIGURED_MESSAGE))
}

// Only http(s) targets are linked; anything else (javascript:, data:) becomes "#".
fn link_target(html_url: &str) -> &str {
	match Url::parse(html_url) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => html_url,
		_ => "#",
	}
}
