// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{staff_fields, staff_payload};
use crate::web::components::{FormValues, ResourceForm};
use crate::web::i18n::use_i18n;
use crate::web::pages::utils::report_failure;
use crate::web::query::{Mutation, use_api};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn CreateStaffPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let create = Mutation::new();

	let submit = Callback::new(move |values: FormValues| {
		let staff = api.staff.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		let payload = staff_payload(&values);
		create.run(async move { staff.create(&payload).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.created", "items.staff"));
					navigate("/staff", Default::default());
				}
				Err(error) => report_failure(toaster, &session, translator, "messages.error.create", "items.staff", &error),
			}
		});
	});

	view! {
		<div class="page_heading">
			<a href="/staff" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.create_staff")}</h2>
		</div>
		<ResourceForm
			fields=Signal::derive(move || staff_fields(i18n.translator()))
			on_submit=submit
			is_submitting=create.pending()
		/>
	}
}
