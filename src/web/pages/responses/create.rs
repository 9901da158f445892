// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{response_fields, response_payload};
use crate::api::Params;
use crate::web::components::{FormValues, ResourceForm};
use crate::web::i18n::use_i18n;
use crate::web::pages::utils::report_failure;
use crate::web::query::{Mutation, use_api, use_list};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn CreateResponsePage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let create = Mutation::new();

	let appeals = use_list(api.appeals.clone(), Params::new);
	let appeal_rows = Signal::derive(move || {
		appeals
			.get()
			.and_then(Result::ok)
			.map(|page| page.results)
			.unwrap_or_default()
	});

	let submit = Callback::new(move |values: FormValues| {
		let Some(payload) = response_payload(&values) else {
			return;
		};
		let responses = api.responses.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		create.run(async move { responses.create_response(&payload).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.created", "items.response"));
					navigate("/responses", Default::default());
				}
				Err(error) => {
					report_failure(toaster, &session, translator, "messages.error.create", "items.response", &error)
				}
			}
		});
	});

	view! {
		<div class="page_heading">
			<a href="/responses" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.create_response")}</h2>
		</div>
		<ResourceForm
			fields=Signal::derive(move || appeal_rows.with(|appeals| response_fields(i18n.translator(), appeals)))
			on_submit=submit
			is_submitting=create.pending()
		/>
	}
}
