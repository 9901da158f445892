// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::Params;
use crate::model::Response;
use crate::pagination::with_page;
use crate::web::components::{Column, ResourceTable, RowActions, StatusBadge};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::pages::errors::error::LoadError;
use crate::web::query::{use_api, use_list};
use crate::web::settings::use_settings;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub fn response_columns(translator: Translator) -> Vec<Column<Response>> {
	vec![
		Column::new(translator.t("fields.reference_number"), "reference_number"),
		Column::new(translator.t("fields.appeal"), "appeal")
			.with_cell(|response: &Response| response.appeal.reference_number.clone().into_any()),
		Column::new(translator.t("fields.text"), "text").with_cell(|response: &Response| {
			view! { <div class="truncated" title=response.text.clone()>{response.text.clone()}</div> }.into_any()
		}),
		Column::new(translator.t("fields.status"), "status").with_cell(|response: &Response| {
			let status = response.status.clone().unwrap_or_else(|| response.appeal.status.clone());
			view! { <StatusBadge status /> }.into_any()
		}),
	]
}

#[component]
pub fn ResponsesPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let page_size = use_settings().page_size;
	let navigate = use_navigate();
	let (page, set_page) = signal(1_u32);

	let responses = use_list(api.responses.clone(), move || with_page(Params::new(), page.get(), page_size));
	let rows = Signal::derive(move || {
		responses
			.get()
			.and_then(Result::ok)
			.map(|page| page.results)
			.unwrap_or_default()
	});
	let total_count = Signal::derive(move || responses.get().and_then(Result::ok).map_or(0, |page| page.count));
	let is_loading = Signal::derive(move || responses.get().is_none());

	let actions = RowActions {
		on_edit: Some(Callback::new(move |response: Response| {
			navigate(&format!("/edit-response/{}", response.id), Default::default())
		})),
		..RowActions::default()
	};

	view! {
		<div class="page_heading">
			<h2>{i18n.t("pages.responses")}</h2>
			<a href="/create-response" class="add_link">{i18n.t("common.add")}</a>
		</div>
		{move || responses.get().and_then(Result::err).map(|error| view! { <LoadError error /> })}
		{move || {
			let actions = actions.clone();
			view! {
				<ResourceTable
					rows
					columns=response_columns(i18n.translator())
					is_loading
					total_count
					page_size
					current_page=page
					on_page_change=Callback::new(move |new_page| set_page.set(new_page))
					actions
				/>
			}
		}}
	}
}
