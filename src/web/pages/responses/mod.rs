// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod create;
mod edit;
mod list;

use crate::model::{Appeal, AppealStatus, Response, ResponsePayload};
use crate::web::components::{FieldDescriptor, FormValues, SelectOption};
use crate::web::i18n::Translator;

pub use create::CreateResponsePage;
pub use edit::EditResponsePage;
pub use list::{ResponsesPage, response_columns};

pub fn response_fields(translator: Translator, appeals: &[Appeal]) -> Vec<FieldDescriptor> {
	let appeal_options = appeals
		.iter()
		.map(|appeal| {
			let label = format!("{} - {}", appeal.reference_number, appeal.sender.full_name);
			SelectOption::new(appeal.id.to_string(), label)
		})
		.collect();
	let statuses = AppealStatus::ALL
		.into_iter()
		.map(|status| SelectOption::new(status.as_str(), status.as_str()))
		.collect();
	vec![
		FieldDescriptor::select("appeal", translator.t("fields.appeal"), appeal_options).required(),
		FieldDescriptor::textarea("text", translator.t("fields.text"))
			.placeholder(translator.t("placeholders.text"))
			.required(),
		FieldDescriptor::select("status", translator.t("fields.status"), statuses).required(),
	]
}

/// The payload a response form describes, if its appeal and status are usable.
pub fn response_payload(values: &FormValues) -> Option<ResponsePayload> {
	Some(ResponsePayload {
		appeal: values.id("appeal")?,
		text: values.trimmed("text"),
		status: values.text("status").parse().ok()?,
		answerer: values.id("answerer"),
	})
}

/// Prefills the edit form. A response without its own status shows its appeal's.
pub fn response_defaults(response: &Response) -> FormValues {
	let status = response
		.status
		.as_deref()
		.filter(|status| !status.is_empty())
		.unwrap_or(response.appeal.status.as_str());
	let status = status
		.parse::<AppealStatus>()
		.unwrap_or(AppealStatus::UnderReview);
	let mut values = FormValues::new()
		.with_text("appeal", response.appeal.id.to_string())
		.with_text("text", response.text.clone())
		.with_text("status", status.as_str());
	if let Some(answerer) = response.answerer {
		values.set_text("answerer", answerer.to_string());
	}
	values
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::AppealReference;

	fn response(status: Option<&str>) -> Response {
		Response {
			id: 2,
			appeal: AppealReference {
				id: 11,
				reference_number: String::from("A-0011"),
				status: String::from("Отправлено"),
			},
			reference_number: String::from("R-0002"),
			text: String::from("We fixed it"),
			status: status.map(String::from),
			answerer: Some(4),
			response_files: Vec::new(),
		}
	}

	#[test]
	fn defaults_prefer_the_response_status() {
		let values = response_defaults(&response(Some("Принято")));
		assert_eq!(values.text("status"), "Принято");
		assert_eq!(values.text("appeal"), "11");
		assert_eq!(values.text("answerer"), "4");
		let values = response_defaults(&response(None));
		assert_eq!(values.text("status"), "Отправлено");
	}

	#[test]
	fn payload_keeps_the_answerer_across_an_edit() {
		let payload = response_payload(&response_defaults(&response(Some("Отказано")))).unwrap();
		assert_eq!(
			payload,
			ResponsePayload {
				appeal: 11,
				text: String::from("We fixed it"),
				status: AppealStatus::Rejected,
				answerer: Some(4),
			}
		);
	}

	#[test]
	fn payload_needs_an_appeal() {
		let values = FormValues::new().with_text("text", "Hi").with_text("status", "Принято");
		assert!(response_payload(&values).is_none());
	}
}
