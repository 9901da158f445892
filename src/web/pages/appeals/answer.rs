// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::summary::{AppealSummary, SenderCard};
use crate::api::{Attachment, Params};
use crate::model::{Appeal, AppealStatus, Paginated, ResponsePayload, Staff};
use crate::web::components::{FieldDescriptor, FormValues, ResourceForm, SelectOption};
use crate::web::i18n::{Translator, use_i18n};
use crate::web::loadable::Loadable;
use crate::web::pages::errors::error::LoadError;
use crate::web::pages::errors::not_found::NotFound;
use crate::web::pages::utils::{IdParam, report_failure};
use crate::web::query::{Mutation, use_api, use_item, use_list};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};

pub fn answer_fields(translator: Translator, staff: &[Staff]) -> Vec<FieldDescriptor> {
	let statuses = AppealStatus::ANSWER_CHOICES
		.into_iter()
		.map(|status| SelectOption::new(status.as_str(), status.as_str()))
		.collect();
	let answerers = staff
		.iter()
		.map(|member| SelectOption::new(member.id.to_string(), member.full_name.clone()))
		.collect();
	vec![
		FieldDescriptor::textarea("text", translator.t("fields.text"))
			.placeholder(translator.t("placeholders.text"))
			.required(),
		FieldDescriptor::select("status", translator.t("fields.status"), statuses).required(),
		FieldDescriptor::select("answerer", translator.t("fields.answerer"), answerers).required(),
		FieldDescriptor::files("files", translator.t("fields.files")),
	]
}

/// The response a filled answer form describes, with the files to upload alongside it.
pub fn answer_payload(appeal_id: i64, mut values: FormValues) -> Option<(ResponsePayload, Vec<Attachment>)> {
	let status = values.text("status").parse().ok()?;
	let payload = ResponsePayload {
		appeal: appeal_id,
		text: values.trimmed("text"),
		status,
		answerer: values.id("answerer"),
	};
	Some((payload, values.take_files("files")))
}

#[component]
pub fn AnswerAppealPage() -> impl IntoView {
	let params = use_params::<IdParam>();
	let Some(appeal_id) = params.read_untracked().as_ref().ok().and_then(|params| params.id) else {
		return view! { <NotFound /> }.into_any();
	};

	let i18n = use_i18n();
	let api = use_api();
	let appeal = use_item(api.appeals.clone(), appeal_id);
	let staff = use_list(api.staff.clone(), Params::new);

	view! {
		<div class="page_heading">
			<a href="/appeals" class="back_link">{i18n.t("common.back")}</a>
			<h2>{i18n.t("pages.answer_appeal")}</h2>
		</div>
		{move || match Loadable::from_read(appeal.get()).join(Loadable::from_read(staff.get())) {
			Loadable::Loading => view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_any(),
			Loadable::Failed(error) => view! { <LoadError error /> }.into_any(),
			Loadable::Ready((appeal, staff)) => view! { <AnswerForm appeal staff /> }.into_any(),
		}}
	}
	.into_any()
}

#[component]
fn AnswerForm(appeal: Appeal, staff: Paginated<Staff>) -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let create = Mutation::new();
	let appeal_id = appeal.id;
	let staff = staff.results;

	let submit = Callback::new(move |values: FormValues| {
		let Some((payload, files)) = answer_payload(appeal_id, values) else {
			return;
		};
		let responses = api.responses.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		create.run(async move { responses.create_with_files(&payload, files).await }, move |result| {
			let translator = i18n.translator_untracked();
			match result {
				Ok(_) => {
					toaster.success(translator.t_item("messages.success.created", "items.response"));
					navigate("/appeals", Default::default());
				}
				Err(error) => {
					report_failure(toaster, &session, translator, "messages.error.create", "items.response", &error)
				}
			}
		});
	});

	view! {
		<div class="appeal_detail">
			<div class="appeal_main">
				<AppealSummary appeal=appeal.clone() />
			</div>
			<aside class="appeal_sidebar">
				<SenderCard appeal />
			</aside>
		</div>
		<section class="answer_form">
			<ResourceForm
				fields=Signal::derive(move || answer_fields(i18n.translator(), &staff))
				on_submit=submit
				is_submitting=create.pending()
				submit_key="common.answer"
			/>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::components::FieldValue;

	fn staff() -> Vec<Staff> {
		vec![Staff {
			id: 4,
			full_name: String::from("Dilnoza Yusupova"),
			phone: String::from("+998901234567"),
			email: String::from("dilnoza@example.com"),
		}]
	}

	#[test]
	fn answerers_come_from_the_staff_list() {
		let fields = answer_fields(Translator::default(), &staff());
		let names: Vec<&str> = fields.iter().map(FieldDescriptor::name).collect();
		assert_eq!(names, ["text", "status", "answerer", "files"]);
		let FieldDescriptor::Select { options, .. } = &fields[2] else {
			panic!("answerer should be a select");
		};
		assert_eq!(options, &vec![SelectOption::new("4", "Dilnoza Yusupova")]);
		let FieldDescriptor::Select { options, .. } = &fields[1] else {
			panic!("status should be a select");
		};
		assert_eq!(options.len(), 2);
	}

	#[test]
	fn payload_takes_form_values() {
		let mut values = FormValues::new()
			.with_text("text", " Resolved ")
			.with_text("status", "Принято")
			.with_text("answerer", "4");
		values.set_files(
			"files",
			vec![Attachment {
				file_name: String::from("reply.pdf"),
				mime_type: None,
				bytes: vec![0x25, 0x50],
			}],
		);
		let (payload, files) = answer_payload(9, values).unwrap();
		assert_eq!(
			payload,
			ResponsePayload {
				appeal: 9,
				text: String::from("Resolved"),
				status: AppealStatus::Accepted,
				answerer: Some(4),
			}
		);
		assert_eq!(files.len(), 1);
	}

	#[test]
	fn payload_needs_a_known_status() {
		let values = FormValues::new().with_text("text", "x").with_text("status", "Maybe");
		assert!(answer_payload(1, values).is_none());
		assert!(!FieldValue::Text(String::from("x")).is_empty());
	}
}
