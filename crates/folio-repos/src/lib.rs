// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Repository showcase for the Folio portfolio site.
//!
//! Fetches the public repositories of a GitHub account, keeps the six most
//! recently updated and renders each one as an HTML card into a
//! [`RenderTarget`].
//!
//! # Flow
//!
//! 1. The caller checks that the page has a projects root and that an
//!    account is configured ([`init_projects_section`]).
//! 2. [`RepoShowcase::fetch`] issues a single
//!    `GET /users/{account}/repos?per_page=100`.
//! 3. [`RepoShowcase::apply`] sorts by `updated_at`, renders the cards and
//!    reveals the grid, or replaces the loading text with a fixed failure
//!    message. Failures are logged, never returned.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_repos::{AccountId, ProjectsSection, RepoClient, RepoShowcase, RepoShowcaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RepoClient::new(RepoShowcaseConfig::default())?;
//! let showcase = RepoShowcase::new(client);
//! let mut section = ProjectsSection::new();
//!
//! if let Some(account) = AccountId::configured("octocat") {
//!     showcase.fetch_and_render(&account, &mut section).await;
//! }
//! println!("{}", section.to_html());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod escape;
pub mod render;
pub mod select;
pub mod showcase;
pub mod target;
pub mod types;

pub use client::RepoClient;
pub use config::{RepoShowcaseConfig, FAILURE_MESSAGE, UNCONFIGURED_MESSAGE};
pub use error::RepoFetchError;
pub use escape::escape_html;
pub use render::{render_card, unconfigured_markup};
pub use select::select_recent;
pub use showcase::{init_projects_section, FetchOutcome, RenderState, RepoShowcase};
pub use target::{ProjectsSection, RenderTarget};
pub use types::{AccountId, RepositorySummary, PLACEHOLDER_ACCOUNT};
