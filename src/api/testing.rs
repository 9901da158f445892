// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A recording transport for exercising the API layer without a backend.

use super::client::{ApiRequest, ApiResponse, Transport};
use super::error::ApiError;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

/// Records every request and answers from a queue of canned responses.
///
/// Queued responses are consumed in order; once the queue is empty the fallback response (if any) is repeated.
#[derive(Default)]
pub struct SpyTransport {
	requests: Mutex<Vec<ApiRequest>>,
	queued: Mutex<VecDeque<ApiResponse>>,
	fallback: Mutex<Option<ApiResponse>>,
}

impl SpyTransport {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn respond(&self, status: u16, body: Value) {
		self.respond_raw(status, body.to_string().into_bytes());
	}

	pub fn respond_raw(&self, status: u16, body: Vec<u8>) {
		self.queued.lock().push_back(ApiResponse { status, body });
	}

	pub fn respond_always(&self, status: u16, body: Value) {
		*self.fallback.lock() = Some(ApiResponse {
			status,
			body: body.to_string().into_bytes(),
		});
	}

	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.lock().clone()
	}

	pub fn request_count(&self) -> usize {
		self.requests.lock().len()
	}

	pub fn last_request(&self) -> Option<ApiRequest> {
		self.requests.lock().last().cloned()
	}
}

#[async_trait(?Send)]
impl Transport for SpyTransport {
	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
		self.requests.lock().push(request);
		let queued = self.queued.lock().pop_front();
		match queued.or_else(|| self.fallback.lock().clone()) {
			Some(response) => Ok(response),
			None => Err(ApiError::Transport(String::from("no response queued"))),
		}
	}
}
