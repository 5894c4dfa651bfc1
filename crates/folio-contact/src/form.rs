// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContactError, FormField};

/// A submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactForm {
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			message: message.into(),
		}
	}

	/// Every field must contain something other than whitespace.
	pub fn validate(&self) -> Result<(), ContactError> {
		let empty: Vec<FormField> = [
			(FormField::Name, &self.name),
			(FormField::Email, &self.email),
			(FormField::Message, &self.message),
		]
		.into_iter()
		.filter(|(_, value)| value.trim().is_empty())
		.map(|(field, _)| field)
		.collect();

		if empty.is_empty() {
			Ok(())
		} else {
			debug!(fields = ?empty, "contact form rejected");
			Err(ContactError::EmptyFields(empty))
		}
	}

	pub fn subject(&self) -> String {
		format!("Website contact from {}", self.name)
	}

	pub fn body(&self) -> String {
		format!(
			"Name: {}\nEmail: {}\n\n{}",
			self.name, self.email, self.message
		)
	}

	/// Build the `mailto:` link for `recipient` after validating the form.
	pub fn mailto_url(&self, recipient: &str) -> Result<String, ContactError> {
		let recipient = recipient.trim();
		if recipient.is_empty()
			|| !recipient.contains('@')
			|| recipient.contains(['?', '&', '#', '<', '>', '"', ' '])
		{
			return Err(ContactError::InvalidRecipient(recipient.to_string()));
		}

		self.validate()?;

		Ok(format!(
			"mailto:{recipient}?subject={}&body={}",
			urlencoding::encode(&self.subject()),
			urlencoding::encode(&self.body())
		))
	}
}
