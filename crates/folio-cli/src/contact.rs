// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `folio contact`: turn a contact form into a mailto link.

use anyhow::bail;
use clap::Args;
use folio_config::FolioConfig;
use folio_contact::ContactForm;

#[derive(Args, Debug)]
pub struct ContactArgs {
	#[arg(long)]
	pub name: String,

	#[arg(long)]
	pub email: String,

	#[arg(long)]
	pub message: String,

	/// Recipient address (overrides contact.recipient)
	#[arg(long)]
	pub to: Option<String>,
}

pub fn mailto_for(args: &ContactArgs, config: &FolioConfig) -> anyhow::Result<String> {
	let Some(recipient) = args.to.as_deref().or(config.contact.recipient.as_deref()) else {
		bail!("no recipient: pass --to or set contact.recipient / FOLIO_CONTACT_RECIPIENT");
	};

	let form = ContactForm::new(args.name.as_str(), args.email.as_str(), args.message.as_str());
	Ok(form.mailto_url(recipient)?)
}

pub fn run(args: ContactArgs, config: &FolioConfig) -> anyhow::Result<()> {
	println!("{}", mailto_for(&args, config)?);
	Ok(())
}
