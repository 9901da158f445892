// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{response_defaults, response_fields, response_payload};
use crate::api::Params;
use crate::model::{Appeal, Paginated, Response};
use crate::web::components::{FormValues, ResourceForm};
use crate::web::i18n::use_i18n;
use crate::web::loadable::Loadable;
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::errors::not_found::NotFound;
use crate::web::pages::utils::{IdParam, report_failure};
use crate::web::query::{Mutation, use_api, use_item, use_list};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};

#[component]
pub fn EditResponsePage() -> impl IntoView {
	let params = use_params::<IdParam>();
	let Some(response_id) = params.read_untracked().as_ref().ok().and_then(|params| params.id) else {
		return view! { <NotFound /> }.into_any();
	};

	let i18n = use_i18n();
	let api = use_api();
	let response = use_item(api.responses.clone(), response_id);
	let appeals = use_list(api.appeals.clone(), Params::new);

	view! {
		<div class="page_heading">
			<a href="/responses" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.edit_response")}</h2>
		</div>
		{move || match Loadable::from_read(response.get()).join(Loadable::from_read(appeals.get())) {
			Loadable::Loading => view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_any(),
			Loadable::Failed(error) => view! { <LoadError error /> }.into_any(),
			Loadable::Ready((response, appeals)) => view! { <EditResponseForm response appeals /> }.into_any(),
		}}
	}
	.into_any()
}

#[component]
fn EditResponseForm(response: Response, appeals: Paginated<Appeal>) -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let update = Mutation::new();
	let response_id = response.id;
	let defaults = response_defaults(&response);
	let appeals = appeals.results;

	let submit = Callback::new(move |values: FormValues| {
		let Some(payload) = response_payload(&values) else {
			return;
		};
		let responses = api.responses.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		update.run(async move { responses.update_response(response_id, &payload).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.updated", "items.response"));
					navigate("/responses", Default::default());
				}
				Err(error) => {
					report_failure(toaster, &session, translator, "messages.error.update", "items.response", &error)
				}
			}
		});
	});

	view! {
		<ResourceForm
			fields=Signal::derive(move || response_fields(i18n.translator(), &appeals))
			on_submit=submit
			default_values=defaults
			is_submitting=update.pending()
		/>
	}
}
