// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::summary::{AppealSummary, FileList, SenderCard};
use crate::model::{Appeal, AppealAnswer, AppealStatus, AppealUpdate};
use crate::web::browser;
use crate::web::components::{FieldDescriptor, FormValues, ResourceForm, SelectOption, StatusBadge};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::loadable::Loadable;
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::errors::not_found::NotFound;
use crate::web::pages::utils::{IdParam, format_date, report_failure};
use crate::web::query::{Mutation, use_api, use_item};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;

pub fn appeal_update_fields(translator: Translator) -> Vec<FieldDescriptor> {
	let statuses = AppealStatus::ALL
		.into_iter()
		.map(|status| SelectOption::new(status.as_str(), status.as_str()))
		.collect();
	vec![
		FieldDescriptor::select("status", translator.t("fields.status"), statuses).required(),
		FieldDescriptor::text("region", translator.t("fields.region"))
			.placeholder(translator.t("placeholders.region")),
	]
}

/// The changes an update form describes. An unparsable status is left out rather than sent.
pub fn appeal_update(values: &FormValues) -> AppealUpdate {
	AppealUpdate {
		status: values.text("status").parse().ok(),
		region: Some(values.trimmed("region")),
	}
}

fn update_defaults(appeal: &Appeal) -> FormValues {
	FormValues::new()
		.with_text("status", appeal.status.as_str())
		.with_text("region", appeal.region.clone())
}

#[component]
pub fn AppealDetailPage() -> impl IntoView {
	let params = use_params::<IdParam>();
	let Some(appeal_id) = params.read_untracked().as_ref().ok().and_then(|params| params.id) else {
		return view! { <NotFound /> }.into_any();
	};

	let i18n = use_i18n();
	let api = use_api();
	let appeal = use_item(api.appeals.clone(), appeal_id);

	view! {
		<div class="page_heading">
			<a href="/appeals" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.appeal_details")}</h2>
		</div>
		{move || match Loadable::from_read(appeal.get()) {
			Loadable::Loading => view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_any(),
			Loadable::Failed(error) => view! { <LoadError error /> }.into_any(),
			Loadable::Ready(appeal) => view! { <AppealDetail appeal /> }.into_any(),
		}}
	}
	.into_any()
}

#[component]
fn AppealDetail(appeal: Appeal) -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let update = Mutation::new();
	let appeal_id = appeal.id;
	let defaults = update_defaults(&appeal);

	let download_pdf = {
		let api = api.clone();
		let session = session.clone();
		move |_| {
			let api = api.clone();
			let session = session.clone();
			spawn_local(async move {
				match api.appeals.pdf(appeal_id).await {
					Ok(bytes) => browser::open_pdf(&bytes),
					Err(error) => {
						toaster.error(i18n.translator_untracked().t("messages.error.pdf"));
						session.handle_error(&error);
					}
				}
			});
		}
	};

	let submit = Callback::new(move |values: FormValues| {
		let appeals = api.appeals.clone();
		let session = session.clone();
		let changes = appeal_update(&values);
		update.run(async move { appeals.update_appeal(appeal_id, &changes).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => toaster.success(translator.t_item("messages.success.updated", "items.appeal")),
				Err(error) => {
					report_failure(toaster, &session, translator, "messages.error.update", "items.appeal", &error)
				}
			}
		});
	});

	view! {
		<div class="appeal_detail">
			<div class="appeal_main">
				<AppealSummary appeal=appeal.clone() />
				{appeal.appeal_response.clone().map(|answer| view! { <ExistingResponse answer /> })}
			</div>
			<aside class="appeal_sidebar">
				<SenderCard appeal=appeal.clone() />
				<button type="button" class="download_pdf" on:click=download_pdf>
					{i18n.t("common.download_pdf")}
				</button>
				<section class="appeal_update">
					<h3>{i18n.t("pages.update_appeal")}</h3>
					<ResourceForm
						fields=Signal::derive(move || appeal_update_fields(i18n.translator()))
						on_submit=submit
						default_values=defaults
						is_submitting=update.pending()
					/>
				</section>
			</aside>
		</div>
	}
}

#[component]
fn ExistingResponse(answer: AppealAnswer) -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<section class="existing_response">
			<h3>{i18n.t("common.existing_response")}</h3>
			<StatusBadge status=answer.status.clone() />
			<p class="response_date">{format_date(Some(&answer.created_at))}</p>
			<p class="response_text">{answer.text.clone()}</p>
			<FileList files=answer.response_files.clone() />
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn update_sends_status_and_trimmed_region() {
		let values = FormValues::new()
			.with_text("status", "Отправлено")
			.with_text("region", " Samarkand ");
		assert_eq!(
			appeal_update(&values),
			AppealUpdate {
				status: Some(AppealStatus::Sent),
				region: Some(String::from("Samarkand")),
			}
		);
	}

	#[test]
	fn update_form_offers_every_status() {
		let fields = appeal_update_fields(Translator::default());
		match &fields[0] {
			FieldDescriptor::Select { options, meta } => {
				assert!(meta.required);
				assert_eq!(options.len(), AppealStatus::ALL.len());
			}
			other => panic!("unexpected field {:?}", other),
		}
		assert!(!fields[1].is_required());
	}
}
