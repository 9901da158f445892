// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{Appeal, StoredFile};
use crate::web::components::StatusBadge;
use crate::web::i18n::use_i18n;
use crate::web::pages::utils::{file_name_from_path, format_date};
use crate::web::settings::use_settings;
use leptos::prelude::*;

/// The read-only facts of an appeal, shared by the detail and answer pages.
#[component]
pub fn AppealSummary(appeal: Appeal) -> impl IntoView {
	let i18n = use_i18n();
	let region = appeal
		.display_region()
		.map(String::from)
		.unwrap_or_else(|| String::from("N/A"));

	view! {
		<section class="appeal_summary">
			<dl class="appeal_facts">
				<dt>{i18n.t("fields.reference_number")}</dt>
				<dd class="reference_number">{appeal.reference_number.clone()}</dd>
				<dt>{i18n.t("fields.status")}</dt>
				<dd><StatusBadge status=appeal.status.to_string() /></dd>
				<dt>{i18n.t("fields.category")}</dt>
				<dd>{appeal.category.name.clone()}</dd>
				<dt>{i18n.t("fields.region")}</dt>
				<dd>{region}</dd>
				<dt>{i18n.t("fields.sender_quantity")}</dt>
				<dd>{appeal.sender_quantity}</dd>
				<dt>{i18n.t("fields.created_at")}</dt>
				<dd>{format_date(Some(&appeal.created_at))}</dd>
			</dl>
			<h3>{i18n.t("fields.text")}</h3>
			<p class="appeal_text">{appeal.text.clone()}</p>
			<FileList files=appeal.appeal_files.clone() />
		</section>
	}
}

/// Who sent an appeal.
#[component]
pub fn SenderCard(appeal: Appeal) -> impl IntoView {
	let i18n = use_i18n();
	let sender = appeal.sender;

	view! {
		<section class="sender_card">
			<h3>{i18n.t("fields.sender")}</h3>
			<dl>
				<dt>{i18n.t("fields.full_name")}</dt>
				<dd>{sender.full_name}</dd>
				<dt>{i18n.t("fields.email")}</dt>
				<dd>{sender.email}</dd>
				<dt>{i18n.t("fields.phone")}</dt>
				<dd>{sender.phone}</dd>
				<dt>{i18n.t("fields.address")}</dt>
				<dd>{sender.address}</dd>
				<dt>{i18n.t("fields.region")}</dt>
				<dd>{sender.region}</dd>
			</dl>
		</section>
	}
}

/// Download links for stored files. Renders nothing without files.
#[component]
pub fn FileList(files: Vec<StoredFile>) -> impl IntoView {
	let i18n = use_i18n();
	let settings = use_settings();
	if files.is_empty() {
		return ().into_any();
	}
	let count = files.len();

	view! {
		<div class="file_list">
			<h3>{i18n.t("fields.files")}" ("{count}")"</h3>
			<ul>
				{files
					.into_iter()
					.enumerate()
					.map(|(index, file)| {
						let name = file_name_from_path(&file.file).to_string();
						view! {
							<li>
								<span>{i18n.t("common.file")}" "{index + 1}" - "{name}</span>
								<a href=settings.file_url(&file.file) target="_blank" rel="noopener">
									{i18n.t("common.download")}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
	.into_any()
}
