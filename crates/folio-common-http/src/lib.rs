// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Folio.
//!
//! Every outbound request carries the standard Folio `User-Agent`; the
//! GitHub REST API rejects requests without one.

mod client;

pub use client::{builder, new_client, user_agent};
