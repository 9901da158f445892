// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{staff_defaults, staff_fields, staff_payload};
use crate::model::Staff;
use crate::web::components::{FormValues, ResourceForm};
use crate::web::i18n::use_i18n;
use crate::web::loadable::Loadable;
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::errors::not_found::NotFound;
use crate::web::pages::utils::{IdParam, report_failure};
use crate::web::query::{Mutation, use_api, use_item};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};

#[component]
pub fn EditStaffPage() -> impl IntoView {
	let params = use_params::<IdParam>();
	let Some(staff_id) = params.read_untracked().as_ref().ok().and_then(|params| params.id) else {
		return view! { <NotFound /> }.into_any();
	};

	let i18n = use_i18n();
	let api = use_api();
	let member = use_item(api.staff.clone(), staff_id);

	view! {
		<div class="page_heading">
			<a href="/staff" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.edit_staff")}</h2>
		</div>
		{move || match Loadable::from_read(member.get()) {
			Loadable::Loading => view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_any(),
			Loadable::Failed(error) => view! { <LoadError error /> }.into_any(),
			Loadable::Ready(member) => view! { <EditStaffForm member /> }.into_any(),
		}}
	}
	.into_any()
}

#[component]
fn EditStaffForm(member: Staff) -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let update = Mutation::new();
	let staff_id = member.id;
	let defaults = staff_defaults(&member);

	let submit = Callback::new(move |values: FormValues| {
		let staff = api.staff.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		let payload = staff_payload(&values);
		update.run(async move { staff.update(staff_id, &payload).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.updated", "items.staff"));
					navigate("/staff", Default::default());
				}
				Err(error) => report_failure(toaster, &session, translator, "messages.error.update", "items.staff", &error),
			}
		});
	});

	view! {
		<ResourceForm
			fields=Signal::derive(move || staff_fields(i18n.translator()))
			on_submit=submit
			default_values=defaults
			is_submitting=update.pending()
		/>
	}
}
