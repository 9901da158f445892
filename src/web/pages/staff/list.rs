// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::Params;
use crate::model::Staff;
use crate::pagination::{clamp_page, with_page};
use crate::web::components::{Column, ResourceTable, RowActions};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::utils::report_failure;
use crate::web::query::{Mutation, use_api, use_list};
use crate::web::session::use_session;
use crate::web::settings::use_settings;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub fn staff_columns(translator: Translator) -> Vec<Column<Staff>> {
	vec![
		Column::new(translator.t("fields.full_name"), "full_name"),
		Column::new(translator.t("fields.phone"), "phone"),
		Column::new(translator.t("fields.email"), "email"),
	]
}

#[component]
pub fn StaffPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let page_size = use_settings().page_size;
	let navigate = use_navigate();
	let delete = Mutation::new();
	let (page, set_page) = signal(1_u32);

	let staff = use_list(api.staff.clone(), move || with_page(Params::new(), page.get(), page_size));
	let rows = Signal::derive(move || {
		staff
			.get()
			.and_then(Result::ok)
			.map(|page| page.results)
			.unwrap_or_default()
	});
	let total_count = Signal::derive(move || staff.get().and_then(Result::ok).map_or(0, |page| page.count));
	let is_loading = Signal::derive(move || staff.get().is_none());

	let on_delete = Callback::new(move |member: Staff| {
		let staff_api = api.staff.clone();
		let session = session.clone();
		delete.run(async move { staff_api.delete(member.id).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(()) => {
					let remaining = total_count.get_untracked().saturating_sub(1);
					set_page.update(|page| *page = clamp_page(*page, remaining, page_size));
					toaster.success(translator.t_item("messages.success.deleted", "items.staff"));
				}
				Err(error) => report_failure(toaster, &session, translator, "messages.error.delete", "items.staff", &error),
			}
		});
	});

	let actions = RowActions {
		on_edit: Some(Callback::new(move |member: Staff| {
			navigate(&format!("/edit-staff/{}", member.id), Default::default())
		})),
		on_delete: Some(on_delete),
		..RowActions::default()
	};

	view! {
		<div class="page_heading">
			<h2>{i18n.t("pages.staff")}</h2>
			<a href="/create-staff" class="add_link">{i18n.t("common.add")}</a>
		</div>
		{move || staff.get().and_then(Result::err).map(|error| view! { <LoadError error /> })}
		{move || {
			let actions = actions.clone();
			view! {
				<ResourceTable
					rows
					columns=staff_columns(i18n.translator())
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
