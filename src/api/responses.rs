// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::appeals;
use super::cache::Namespace;
use super::client::{Attachment, MultipartField};
use super::error::ApiError;
use super::resource::{Endpoints, ResourceApi};
use crate::model::{Response, ResponsePayload};

pub const NAMESPACE: Namespace = "responses";

pub const ENDPOINTS: Endpoints = Endpoints {
	list: "responses/list",
	item: "responses/{id}",
	create: "responses/create/",
	update: "responses/{id}/update/",
	delete: "responses/{id}/delete/",
};

pub type ResponsesApi = ResourceApi<Response>;

/// Writing a response changes the answered appeal on the backend (its status and attached answer), so every
/// response write also refreshes the appeals it touches.
impl ResourceApi<Response> {
	/// Answers an appeal, uploading `files` in the same multipart request.
	pub async fn create_with_files(
		&self,
		payload: &ResponsePayload,
		files: Vec<Attachment>,
	) -> Result<Response, ApiError> {
		let created = self.create_multipart(response_form(payload, files)).await?;
		self.refresh_appeal(payload.appeal);
		Ok(created)
	}

	pub async fn create_response(&self, payload: &ResponsePayload) -> Result<Response, ApiError> {
		let created = self.create(payload).await?;
		self.refresh_appeal(payload.appeal);
		Ok(created)
	}

	/// Updates a response. The response may have moved to another appeal, so every cached appeal is dropped.
	pub async fn update_response(&self, id: i64, payload: &ResponsePayload) -> Result<Response, ApiError> {
		let updated = self.update(id, payload).await?;
		self.cache().invalidate_namespace(appeals::NAMESPACE);
		Ok(updated)
	}

	fn refresh_appeal(&self, appeal_id: i64) {
		self.cache().invalidate_collections(appeals::NAMESPACE);
		self.cache().invalidate_item(appeals::NAMESPACE, appeal_id);
	}
}

/// Lays a response out as multipart fields: the scalar fields first, then one `files` part per attachment.
pub fn response_form(payload: &ResponsePayload, files: Vec<Attachment>) -> Vec<MultipartField> {
	let mut fields = vec![
		text_field("appeal", payload.appeal.to_string()),
		text_field("text", payload.text.clone()),
		text_field("status", payload.status.as_str().to_string()),
	];
	if let Some(answerer) = payload.answerer {
		fields.push(text_field("answerer", answerer.to_string()));
	}
	fields.extend(files.into_iter().map(|attachment| MultipartField::File {
		name: String::from("files"),
		attachment,
	}));
	fields
}

fn text_field(name: &str, value: String) -> MultipartField {
	MultipartField::Text {
		name: name.to_string(),
		value,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::AppealStatus;

	#[test]
	fn form_without_answerer_or_files() {
		let payload = ResponsePayload {
			appeal: 5,
			text: String::from("Resolved"),
			status: AppealStatus::Rejected,
			answerer: None,
		};
		let names: Vec<String> = response_form(&payload, Vec::new())
			.iter()
			.map(|field| field.name().to_string())
			.collect();
		assert_eq!(names, ["appeal", "text", "status"]);
	}
}
