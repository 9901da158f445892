// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{category_fields, category_payload};
use crate::api::Params;
use crate::model::AppealCategory;
use crate::web::components::{Column, FormValues, ResourceForm, ResourceTable, RowActions};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::utils::{format_date, report_failure};
use crate::web::query::{Mutation, use_api, use_list};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;

/// Categories come back as one unpaginated array, shown on a single page of this size.
const CATEGORY_PAGE_SIZE: u32 = 30;

pub fn category_list_params(search: &str) -> Params {
	let mut params = Params::new();
	let search = search.trim();
	if !search.is_empty() {
		params.insert(String::from("name"), search.to_string());
	}
	params
}

pub fn category_columns(translator: Translator) -> Vec<Column<AppealCategory>> {
	vec![
		Column::new(translator.t("fields.name"), "name"),
		Column::new(translator.t("fields.created_at"), "created_at")
			.with_cell(|category: &AppealCategory| format_date(category.created_at.as_deref()).into_any()),
	]
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let (search, set_search) = signal(String::new());
	let editing: RwSignal<Option<AppealCategory>> = RwSignal::new(None);
	let update = Mutation::new();
	let delete = Mutation::new();

	let categories = use_list(api.categories.clone(), move || category_list_params(&search.get()));
	let rows = Signal::derive(move || categories.get().and_then(Result::ok).unwrap_or_default());
	let total_count = Signal::derive(move || rows.with(|rows| rows.len() as u64));
	let is_loading = Signal::derive(move || categories.get().is_none());

	let on_delete = Callback::new({
		let api = api.clone();
		let session = session.clone();
		move |category: AppealCategory| {
			let categories = api.categories.clone();
			let session = session.clone();
			delete.run(async move { categories.delete(category.id).await }, move |result| {
				let translator = i18n.translator_untracked();
				match result {
					Ok(()) => toaster.success(translator.t_item("messages.success.deleted", "items.category")),
					Err(error) => {
						report_failure(toaster, &session, translator, "messages.error.delete", "items.category", &error)
					}
				}
			});
		}
	});

	let submit_edit = Callback::new(move |values: FormValues| {
		let Some(category) = editing.get_untracked() else {
			return;
		};
		let categories = api.categories.clone();
		let session = session.clone();
		let payload = category_payload(&values);
		update.run(async move { categories.update(category.id, &payload).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.updated", "items.category"));
					editing.set(None);
				}
				Err(error) => {
					report_failure(toaster, &session, translator, "messages.error.update", "items.category", &error)
				}
			}
		});
	});

	let actions = RowActions {
		on_edit: Some(Callback::new(move |category: AppealCategory| editing.set(Some(category)))),
		on_delete: Some(on_delete),
		..RowActions::default()
	};

	view! {
		<div class="page_heading">
			<h2>{i18n.t("pages.categories")}</h2>
			<a href="/create-appeal-category" class="add_link">{i18n.t("common.add")}</a>
		</div>
		<div class="table_filters">
			<input
				type="search"
				placeholder=move || i18n.translator().t("placeholders.search_name")
				prop:value=search
				on:input=move |event| set_search.set(event_target_value(&event))
			/>
		</div>
		{move || categories.get().and_then(Result::err).map(|error| view! { <LoadError error /> })}
		{move || {
			let actions = actions.clone();
			view! {
				<ResourceTable
					rows
					columns=category_columns(i18n.translator())
					is_loading
					total_count
					page_size=CATEGORY_PAGE_SIZE
					current_page=1_u32
					actions
				/>
			}
		}}
		{move || {
			editing
				.get()
				.map(|category| {
					let defaults = FormValues::new().with_text("name", category.name);
					view! {
						<div class="dialog_backdrop">
							<div class="dialog" role="dialog">
								<div class="dialog_heading">
									<h3>{i18n.t("pages.edit_category")}</h3>
									<button type="button" class="dialog_close" on:click=move |_| editing.set(None)>
										"×"
									</button>
								</div>
								<ResourceForm
									fields=Signal::derive(move || category_fields(i18n.translator()))
									on_submit=submit_edit
									default_values=defaults
									is_submitting=update.pending()
								/>
							</div>
						</div>
					}
				})
		}}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_search_sends_no_params() {
		assert!(category_list_params("   ").is_empty());
		assert_eq!(category_list_params(" Roads ")["name"], "Roads");
	}

	#[test]
	fn name_is_required_and_trimmed() {
		let fields = category_fields(Translator::default());
		assert!(fields[0].is_required());
		let values = FormValues::new().with_text("name", " Utilities ");
		assert_eq!(category_payload(&values).name, "Utilities");
	}
}
