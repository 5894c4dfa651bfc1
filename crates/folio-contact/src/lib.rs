// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Contact form handling for the Folio portfolio site.
//!
//! The site has no backend: a submitted contact form becomes a `mailto:` link
//! that opens the visitor's mail client with subject and body filled in.

mod error;
mod form;

pub use error::{ContactError, FormField};
pub use form::ContactForm;
