// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Render targets for the projects section.

use crate::escape::escape_html;

pub const ROOT_ID: &str = "projects-root";
pub const GRID_ID: &str = "projects-grid";
pub const LOADING_CLASS: &str = "loading";
pub const LOADING_TEXT: &str = "Loading repositories…";

/// The document surface a render pass mutates.
///
/// Implementors own the loading indicator and the card grid inside the
/// projects root. Card children are always replaced wholesale.
pub trait RenderTarget {
	/// Replace the loading indicator's text.
	fn set_loading_text(&mut self, text: &str);

	/// Show the loading indicator.
	fn show_loading(&mut self);

	/// Hide the loading indicator.
	fn hide_loading(&mut self);

	/// Drop every existing card and insert `cards` in order.
	fn replace_cards(&mut self, cards: Vec<String>);

	/// Make the card grid visible.
	fn show_grid(&mut self);

	/// Hide the card grid.
	fn hide_grid(&mut self);

	/// Replace everything inside the root with `markup`.
	fn replace_root_content(&mut self, markup: String);
}

/// In-memory projects section, serialized with [`ProjectsSection::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSection {
	loading_text: String,
	loading_visible: bool,
	grid_visible: bool,
	cards: Vec<String>,
	root_override: Option<String>,
}

impl Default for ProjectsSection {
	fn default() -> Self {
		Self::new()
	}
}

impl ProjectsSection {
	/// Initial page state: loading indicator shown, grid hidden and empty.
	pub fn new() -> Self {
		Self {
			loading_text: LOADING_TEXT.to_string(),
			loading_visible: true,
			grid_visible: false,
			cards: Vec::new(),
			root_override: None,
		}
	}

	pub fn loading_text(&self) -> &str {
		&self.loading_text
	}

	pub fn is_loading_visible(&self) -> bool {
		self.loading_visible
	}

	pub fn is_grid_visible(&self) -> bool {
		self.grid_visible
	}

	pub fn cards(&self) -> &[String] {
		&self.cards
	}

	pub fn root_override(&self) -> Option<&str> {
		self.root_override.as_deref()
	}

	/// Serialize the section as the `#projects-root` element.
	pub fn to_html(&self) -> String {
		if let Some(markup) = &self.root_override {
			return format!("<section id=\"{ROOT_ID}\">\n{markup}\n</section>\n");
		}

		let mut html = format!("<section id=\"{ROOT_ID}\">\n");
		html.push_str(&format!(
			"<div class=\"{LOADING_CLASS}\"{}>{}</div>\n",
			hidden_style(self.loading_visible),
			escape_html(&self.loading_text)
		));
		html.push_str(&format!(
			"<div id=\"{GRID_ID}\" class=\"projects-grid\"{}>\n",
			hidden_style(self.grid_visible)
		));
		for card in &self.cards {
			html.push_str(card);
			html.push('\n');
		}
		html.push_str("</div>\n</section>\n");
		html
	}
}

fn hidden_style(visible: bool) -> &'static str {
	if visible {
		""
	} else {
		" style=\"display:none\""
	}
}

impl RenderTarget for ProjectsSection {
	fn set_loading_text(&mut self, text: &str) {
		self.loading_text = text.to_string();
	}

	fn show_loading(&mut self) {
		self.loading_visible = true;
	}

	fn hide_loading(&mut self) {
		self.loading_visible = false;
	}

	fn replace_cards(&mut self, cards: Vec<String>) {
		self.cards = cards;
	}

	fn show_grid(&mut self) {
		self.grid_visible = true;
	}

	fn hide_grid(&mut self) {
		self.grid_visible = false;
	}

	fn replace_root_content(&mut self, markup: String) {
		self.root_override = Some(markup);
	}
}
