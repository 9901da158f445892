// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use appeal_console::api::cache::QueryKey;
use appeal_console::api::client::{Method, MultipartField, RequestBody};
use appeal_console::api::testing::SpyTransport;
use appeal_console::api::{Api, ApiClient, Attachment, Params, QueryCache};
use appeal_console::model::{AppealStatus, ResponsePayload};
use appeal_console::web::components::FormValues;
use appeal_console::web::pages::appeals::{answer_payload, appeal_list_params};
use serde_json::{Value, json};
use std::sync::Arc;

fn api(spy: &Arc<SpyTransport>) -> Api {
	Api::new(ApiClient::new(spy.clone()), QueryCache::new())
}

fn appeal_json(id: i64, status: &str) -> Value {
	json!({
		"id": id,
		"reference_number": format!("A-{:04}", id),
		"region": "Tashkent",
		"text": "Pothole on the main road",
		"status": status,
		"sender_quantity": 1,
		"category": { "id": 2, "name": "Roads" },
		"sender": {
			"full_name": "Ivan Petrov",
			"email": "ivan@example.com",
			"phone": "+998901234567",
			"address": "Main st. 1",
			"region": "Tashkent"
		},
		"created_at": "2025-03-01T10:15:00Z"
	})
}

fn page_json(rows: Vec<Value>) -> Value {
	json!({ "limit": 10, "offset": 0, "count": rows.len(), "next": null, "previous": null, "results": rows })
}

#[tokio::test]
async fn status_filter_reaches_the_backend_unmodified() {
	let spy = SpyTransport::new();
	spy.respond(200, page_json(vec![appeal_json(1, "Принято"), appeal_json(4, "Принято")]));
	let api = api(&spy);

	let params = appeal_list_params("Принято", "", 1, 10);
	let page = api.appeals.list(&params).await.unwrap();

	let request = spy.last_request().unwrap();
	assert_eq!(request.method, Method::Get);
	assert_eq!(request.path, "appeals/list");
	assert!(request.query.contains(&(String::from("status"), String::from("Принято"))));

	let ids: Vec<i64> = page.results.iter().map(|appeal| appeal.id).collect();
	assert_eq!(ids, [1, 4]);
	assert!(page.results.iter().all(|appeal| appeal.status == AppealStatus::Accepted));
	assert_eq!(page.count, 2);
}

#[tokio::test]
async fn answering_uploads_every_file_in_one_form() {
	let spy = SpyTransport::new();
	spy.respond(
		201,
		json!({
			"id": 12,
			"appeal": { "id": 3, "reference_number": "A-0003", "status": "Принято" },
			"text": "Resolved",
			"status": "Принято",
			"answerer": 4
		}),
	);
	let api = api(&spy);

	let mut values = FormValues::new()
		.with_text("text", "Resolved")
		.with_text("status", "Принято")
		.with_text("answerer", "4");
	values.set_files(
		"files",
		["reply.pdf", "photo.jpg"]
			.into_iter()
			.map(|name| Attachment {
				file_name: String::from(name),
				mime_type: None,
				bytes: vec![1, 2, 3],
			})
			.collect(),
	);
	let (payload, files) = answer_payload(3, values).unwrap();
	assert_eq!(
		payload,
		ResponsePayload {
			appeal: 3,
			text: String::from("Resolved"),
			status: AppealStatus::Accepted,
			answerer: Some(4),
		}
	);

	let created = api.responses.create_with_files(&payload, files).await.unwrap();
	assert_eq!(created.id, 12);

	let request = spy.last_request().unwrap();
	assert_eq!(request.method, Method::Post);
	assert_eq!(request.path, "responses/create/");
	let RequestBody::Multipart(fields) = request.body else {
		panic!("expected a multipart body");
	};
	let names: Vec<&str> = fields.iter().map(MultipartField::name).collect();
	assert_eq!(names, ["appeal", "text", "status", "answerer", "files", "files"]);
	assert!(fields.contains(&MultipartField::Text {
		name: String::from("status"),
		value: String::from("Принято"),
	}));
}

#[tokio::test]
async fn deleting_staff_refreshes_the_staff_list() {
	let spy = SpyTransport::new();
	spy.respond(200, page_json(vec![json!({ "id": 7, "full_name": "Bobur", "phone": "+998", "email": "b@e.uz" })]));
	spy.respond(204, Value::Null);
	let api = api(&spy);
	let list_key = QueryKey::list("staff", Params::new());

	api.staff.list(&Params::new()).await.unwrap();
	assert!(api.cache.contains(&list_key));

	api.staff.delete(7).await.unwrap();

	let request = spy.last_request().unwrap();
	assert_eq!(request.method, Method::Delete);
	assert_eq!(request.path, "staff/7/delete/");
	assert!(!api.cache.contains(&list_key));
}

#[tokio::test]
async fn failed_staff_delete_keeps_the_cache() {
	let spy = SpyTransport::new();
	spy.respond(200, page_json(Vec::new()));
	spy.respond(403, json!({ "detail": "forbidden" }));
	let api = api(&spy);
	let list_key = QueryKey::list("staff", Params::new());

	api.staff.list(&Params::new()).await.unwrap();
	let error = api.staff.delete(7).await.unwrap_err();

	assert_eq!(error.status(), Some(403));
	assert!(api.cache.contains(&list_key));
}

#[tokio::test]
async fn other_namespaces_survive_a_mutation() {
	let spy = SpyTransport::new();
	spy.respond(200, page_json(vec![appeal_json(1, "Отправлено")]));
	spy.respond(204, Value::Null);
	let api = api(&spy);

	api.appeals.list(&Params::new()).await.unwrap();
	api.staff.delete(7).await.unwrap();

	assert!(api.cache.contains(&QueryKey::list("appeals", Params::new())));
}

#[tokio::test]
async fn answering_refreshes_the_answered_appeal() {
	let spy = SpyTransport::new();
	spy.respond(200, page_json(vec![appeal_json(3, "Рассматривается")]));
	spy.respond(200, appeal_json(3, "Рассматривается"));
	spy.respond(
		201,
		json!({
			"id": 12,
			"appeal": { "id": 3, "reference_number": "A-0003", "status": "Принято" },
			"text": "Resolved",
			"status": "Принято"
		}),
	);
	spy.respond(200, page_json(vec![appeal_json(3, "Принято")]));
	spy.respond(200, appeal_json(3, "Принято"));
	let api = api(&spy);

	api.appeals.list(&Params::new()).await.unwrap();
	api.appeals.get(3).await.unwrap();
	let payload = ResponsePayload {
		appeal: 3,
		text: String::from("Resolved"),
		status: AppealStatus::Accepted,
		answerer: Some(4),
	};
	api.responses.create_with_files(&payload, Vec::new()).await.unwrap();

	let listed = api.appeals.list(&Params::new()).await.unwrap();
	let fetched = api.appeals.get(3).await.unwrap();
	assert_eq!(listed.results[0].status, AppealStatus::Accepted);
	assert_eq!(fetched.status, AppealStatus::Accepted);
	assert_eq!(spy.request_count(), 5);
}

#[tokio::test]
async fn editing_a_response_refreshes_appeals() {
	let spy = SpyTransport::new();
	spy.respond(200, appeal_json(5, "Принято"));
	spy.respond(
		200,
		json!({
			"id": 12,
			"appeal": { "id": 6, "reference_number": "A-0006", "status": "Отказано" },
			"text": "Moved",
			"status": "Отказано"
		}),
	);
	spy.respond(200, appeal_json(5, "Рассматривается"));
	let api = api(&spy);

	api.appeals.get(5).await.unwrap();
	let payload = ResponsePayload {
		appeal: 6,
		text: String::from("Moved"),
		status: AppealStatus::Rejected,
		answerer: None,
	};
	api.responses.update_response(12, &payload).await.unwrap();

	assert!(!api.cache.contains(&QueryKey::item("appeals", 5)));
	assert_eq!(api.appeals.get(5).await.unwrap().status, AppealStatus::UnderReview);
	assert_eq!(spy.requests()[1].path, "responses/12/update/");
}
