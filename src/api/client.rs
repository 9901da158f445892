// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Params;
use super::error::ApiError;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
	Get,
	Post,
	Put,
	Delete,
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		};
		f.write_str(name)
	}
}

/// A file picked in the browser, read fully into memory for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
	pub file_name: String,
	pub mime_type: Option<String>,
	pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MultipartField {
	Text { name: String, value: String },
	File { name: String, attachment: Attachment },
}

impl MultipartField {
	pub fn name(&self) -> &str {
		match self {
			Self::Text { name, .. } | Self::File { name, .. } => name,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
	Empty,
	Json(Value),
	Multipart(Vec<MultipartField>),
}

/// A request as the console describes it: relative path, query pairs and body.
/// The transport owns the base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	pub method: Method,
	pub path: String,
	pub query: Vec<(String, String)>,
	pub body: RequestBody,
	pub bearer: Option<String>,
}

impl ApiRequest {
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			query: Vec::new(),
			body: RequestBody::Empty,
			bearer: None,
		}
	}

	pub fn query(mut self, params: &Params) -> Self {
		self.query = params
			.iter()
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();
		self
	}

	pub fn body(mut self, body: RequestBody) -> Self {
		self.body = body;
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
	pub status: u16,
	pub body: Vec<u8>,
}

impl ApiResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// The wire. Futures aren't required to be `Send`, since in the browser they never are.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Sends requests over HTTP with reqwest.
pub struct HttpTransport {
	client: reqwest::Client,
	base_url: String,
}

impl HttpTransport {
	/// `base_url` is the API root, e.g. `https://eappeal.uz/api/v1/`.
	pub fn new(base_url: &str) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
		let url = self.url(&request.path);
		let mut builder = match request.method {
			Method::Get => self.client.get(&url),
			Method::Post => self.client.post(&url),
			Method::Put => self.client.put(&url),
			Method::Delete => self.client.delete(&url),
		};
		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}
		if let Some(token) = &request.bearer {
			builder = builder.bearer_auth(token);
		}
		builder = match request.body {
			RequestBody::Empty => builder,
			RequestBody::Json(value) => builder.json(&value),
			RequestBody::Multipart(fields) => builder.multipart(multipart_form(fields)?),
		};

		let response = builder.send().await?;
		let status = response.status().as_u16();
		let body = response.bytes().await?.to_vec();
		Ok(ApiResponse { status, body })
	}
}

fn multipart_form(fields: Vec<MultipartField>) -> Result<Form, ApiError> {
	let mut form = Form::new();
	for field in fields {
		form = match field {
			MultipartField::Text { name, value } => form.text(name, value),
			MultipartField::File { name, attachment } => {
				let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
				if let Some(mime_type) = attachment.mime_type {
					part = part.mime_str(&mime_type)?;
				}
				form.part(name, part)
			}
		};
	}
	Ok(form)
}

/// HTTP client adapter: attaches the bearer token, checks status codes and decodes bodies.
#[derive(Clone)]
pub struct ApiClient {
	transport: Arc<dyn Transport>,
	token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
	pub fn new(transport: Arc<dyn Transport>) -> Self {
		Self {
			transport,
			token: Arc::new(RwLock::new(None)),
		}
	}

	pub fn http(base_url: &str) -> Self {
		Self::new(Arc::new(HttpTransport::new(base_url)))
	}

	pub fn set_token(&self, token: Option<String>) {
		*self.token.write() = token;
	}

	pub fn has_token(&self) -> bool {
		self.token.read().is_some()
	}

	/// Sends a request and returns the raw body of a 2xx response.
	pub async fn send(&self, mut request: ApiRequest) -> Result<Vec<u8>, ApiError> {
		request.bearer = self.token.read().clone();
		let method = request.method;
		let path = request.path.clone();
		tracing::debug!(%method, %path, "sending request");

		let response = match self.transport.execute(request).await {
			Ok(response) => response,
			Err(error) => {
				tracing::error!(source = ?error, %method, %path, "Request failed to complete");
				return Err(error);
			}
		};
		if !response.is_success() {
			let body = String::from_utf8_lossy(&response.body).into_owned();
			tracing::warn!(status = response.status, %method, %path, "Backend rejected request");
			return Err(ApiError::Status {
				status: response.status,
				body,
			});
		}
		Ok(response.body)
	}

	pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
		let body = self.send(request).await?;
		Ok(serde_json::from_slice(&body)?)
	}

	pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, ApiError> {
		self.send_json(ApiRequest::new(Method::Get, path).query(params)).await
	}

	pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
		self.send(ApiRequest::new(Method::Get, path)).await
	}

	pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
		let body = RequestBody::Json(serde_json::to_value(body)?);
		self.send_json(ApiRequest::new(Method::Post, path).body(body)).await
	}

	pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
		let body = RequestBody::Json(serde_json::to_value(body)?);
		self.send_json(ApiRequest::new(Method::Put, path).body(body)).await
	}

	pub async fn post_multipart<T: DeserializeOwned>(
		&self,
		path: &str,
		fields: Vec<MultipartField>,
	) -> Result<T, ApiError> {
		self.send_json(ApiRequest::new(Method::Post, path).body(RequestBody::Multipart(fields)))
			.await
	}

	/// Deletes a resource; whatever body comes back is ignored.
	pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
		self.send(ApiRequest::new(Method::Delete, path)).await.map(|_| ())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::testing::SpyTransport;
	use serde_json::json;

	#[tokio::test]
	async fn attaches_bearer_token() {
		let spy = SpyTransport::new();
		spy.respond(200, json!({ "ok": true }));
		let client = ApiClient::new(spy.clone());
		client.set_token(Some(String::from("secret")));

		let _: Value = client.get_json("staff/list", &Params::new()).await.unwrap();

		let request = spy.last_request().unwrap();
		assert_eq!(request.bearer.as_deref(), Some("secret"));
		assert_eq!(request.method, Method::Get);
	}

	#[tokio::test]
	async fn non_success_status_is_an_error() {
		let spy = SpyTransport::new();
		spy.respond(400, json!({ "name": ["already exists"] }));
		let client = ApiClient::new(spy.clone());

		let result: Result<Value, ApiError> = client.post_json("appeals/category/create/", &json!({ "name": "x" })).await;
		let error = result.unwrap_err();
		assert_eq!(error.status(), Some(400));
		assert!(matches!(error, ApiError::Status { body, .. } if body.contains("already exists")));
	}

	#[tokio::test]
	async fn undecodable_body_is_a_decode_error() {
		let spy = SpyTransport::new();
		spy.respond_raw(200, b"<html>".to_vec());
		let client = ApiClient::new(spy.clone());

		let result: Result<Value, ApiError> = client.get_json("appeals/list", &Params::new()).await;
		assert!(matches!(result, Err(ApiError::Decode(_))));
	}

	#[test]
	fn joins_base_url_and_path() {
		let transport = HttpTransport::new("https://eappeal.uz/api/v1/");
		assert_eq!(transport.url("/staff/list"), "https://eappeal.uz/api/v1/staff/list");
		assert_eq!(transport.url("appeals/7"), "https://eappeal.uz/api/v1/appeals/7");
	}
}
