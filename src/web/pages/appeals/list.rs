// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{Params, appeals};
use crate::model::{Appeal, AppealStatus, AppealsDashboard};
use crate::pagination::with_page;
use crate::web::components::{Column, ResourceTable, RowActions, StatusBadge};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::loadable::Loadable;
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::utils::format_date;
use crate::web::query::{use_api, use_list, use_query};
use crate::web::settings::use_settings;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// List parameters for the appeals table. Empty filters are left out; the rest go to the backend as typed.
pub fn appeal_list_params(status: &str, search: &str, page: u32, page_size: u32) -> Params {
	let mut params = Params::new();
	if !status.is_empty() {
		params.insert(String::from("status"), status.to_string());
	}
	let search = search.trim();
	if !search.is_empty() {
		params.insert(String::from("reference_number"), search.to_string());
	}
	with_page(params, page, page_size)
}

pub fn appeal_columns(translator: Translator) -> Vec<Column<Appeal>> {
	vec![
		Column::new(translator.t("fields.reference_number"), "reference_number"),
		Column::new(translator.t("fields.full_name"), "sender").with_cell(|appeal: &Appeal| {
			appeal.sender.full_name.clone().into_any()
		}),
		Column::new(translator.t("fields.phone"), "sender")
			.with_cell(|appeal: &Appeal| appeal.sender.phone.clone().into_any()),
		Column::new(translator.t("fields.category"), "category")
			.with_cell(|appeal: &Appeal| appeal.category.name.clone().into_any()),
		Column::new(translator.t("fields.region"), "region").with_cell(|appeal: &Appeal| {
			appeal.display_region().unwrap_or("N/A").to_string().into_any()
		}),
		Column::new(translator.t("fields.status"), "status").with_cell(|appeal: &Appeal| {
			view! { <StatusBadge status=appeal.status.to_string() /> }.into_any()
		}),
		Column::new(translator.t("fields.created_at"), "created_at")
			.with_cell(|appeal: &Appeal| format_date(Some(&appeal.created_at)).into_any()),
	]
}

#[component]
pub fn AppealsPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let page_size = use_settings().page_size;
	let navigate = use_navigate();

	let (page, set_page) = signal(1_u32);
	let (search, set_search) = signal(String::new());
	let (status, set_status) = signal(String::new());

	let appeals = use_list(api.appeals.clone(), move || {
		appeal_list_params(&status.get(), &search.get(), page.get(), page_size)
	});
	let dashboard = {
		let appeals_api = api.appeals.clone();
		use_query(appeals::NAMESPACE, move || {
			let appeals_api = appeals_api.clone();
			async move { appeals_api.dashboard().await }
		})
	};

	let rows = Signal::derive(move || {
		appeals
			.get()
			.and_then(Result::ok)
			.map(|page| page.results)
			.unwrap_or_default()
	});
	let total_count = Signal::derive(move || appeals.get().and_then(Result::ok).map_or(0, |page| page.count));
	let is_loading = Signal::derive(move || appeals.get().is_none());

	let actions = RowActions {
		on_edit: Some(Callback::new({
			let navigate = navigate.clone();
			move |appeal: Appeal| navigate(&format!("/edit-appeal/{}", appeal.id), Default::default())
		})),
		on_answer: Some(Callback::new(move |appeal: Appeal| {
			navigate(&format!("/answer-appeal/{}", appeal.id), Default::default())
		})),
		..RowActions::default()
	};

	view! {
		<h2>{i18n.t("pages.appeals")}</h2>
		{move || match Loadable::from_read(dashboard.get()) {
			Loadable::Ready(dashboard) => view! { <DashboardCounters dashboard /> }.into_any(),
			_ => ().into_any(),
		}}
		<div class="table_filters">
			<input
				type="search"
				placeholder=move || i18n.translator().t("placeholders.search_reference")
				prop:value=search
				on:input=move |event| {
					set_search.set(event_target_value(&event));
					set_page.set(1);
				}
			/>
			<select on:change=move |event| {
				set_status.set(event_target_value(&event));
				set_page.set(1);
			}>
				<option value="">{i18n.t("filters.all_statuses")}</option>
				{AppealStatus::ALL
					.into_iter()
					.map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
					.collect_view()}
			</select>
		</div>
		{move || appeals.get().and_then(Result::err).map(|error| view! { <LoadError error /> })}
		{move || {
			let actions = actions.clone();
			view! {
				<ResourceTable
					rows
					columns=appeal_columns(i18n.translator())
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

#[component]
fn DashboardCounters(dashboard: AppealsDashboard) -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="dashboard_counters">
			<div class="dashboard_counter">
				<span class="dashboard_counter_label">{i18n.t("dashboard.total")}</span>
				<span class="dashboard_counter_value">{dashboard.total_appeal}</span>
			</div>
			{AppealStatus::ALL
				.into_iter()
				.map(|status| {
					view! {
						<div class="dashboard_counter">
							<StatusBadge status=status.to_string() />
							<span class="dashboard_counter_value">{dashboard.total_for(status)}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filters_pass_through_unmodified() {
		let params = appeal_list_params("Принято", "", 1, 10);
		assert_eq!(params.get("status").map(String::as_str), Some("Принято"));
		assert!(!params.contains_key("reference_number"));
		assert_eq!(params["limit"], "10");
		assert_eq!(params["offset"], "0");
	}

	#[test]
	fn search_is_trimmed_and_pages_offset() {
		let params = appeal_list_params("", "  A-0042 ", 3, 10);
		assert!(!params.contains_key("status"));
		assert_eq!(params["reference_number"], "A-0042");
		assert_eq!(params["offset"], "20");
	}

	#[test]
	fn columns_follow_the_language() {
		let headers: Vec<String> = appeal_columns(Translator::new(crate::web::i18n::Language::En))
			.into_iter()
			.map(|column| column.header)
			.collect();
		assert_eq!(headers[0], "Reference number");
		assert_eq!(headers.len(), 7);
	}
}
