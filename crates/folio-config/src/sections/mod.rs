// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod contact;
mod github;
mod logging;

pub use contact::{ContactConfig, ContactConfigLayer};
pub use github::{GithubConfig, GithubConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
