// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use thiserror::Error;

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
	Name,
	Email,
	Message,
}

impl FormField {
	pub fn as_str(self) -> &'static str {
		match self {
			FormField::Name => "name",
			FormField::Email => "email",
			FormField::Message => "message",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
	/// One or more fields were blank; every blank field is listed.
	#[error("required fields are empty: {}", join_fields(.0))]
	EmptyFields(Vec<FormField>),

	/// The configured recipient address is unusable.
	#[error("invalid recipient address: {0:?}")]
	InvalidRecipient(String),
}

fn join_fields(fields: &[FormField]) -> String {
	fields
		.iter()
		.map(|f| f.as_str())
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_fields_display_lists_all() {
		let err = ContactError::EmptyFields(vec![FormField::Name, FormField::Message]);
		assert_eq!(err.to_string(), "required fields are empty: name, message");
	}
}
