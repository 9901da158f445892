// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Clone so a single failed read can be handed to every caller that was waiting on it.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(String),
	#[error("server returned {status}: {body}")]
	Status { status: u16, body: String },
	#[error("unexpected response body: {0}")]
	Decode(String),
	#[error("request was abandoned before it completed")]
	Cancelled,
}

impl ApiError {
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	pub fn is_client_error(&self) -> bool {
		self.status().is_some_and(|status| (400..500).contains(&status))
	}

	pub fn is_server_error(&self) -> bool {
		self.status().is_some_and(|status| status >= 500)
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(401)
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

impl From<reqwest::Error> for ApiError {
	fn from(error: reqwest::Error) -> Self {
		Self::Transport(error.to_string())
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(error: serde_json::Error) -> Self {
		Self::Decode(error.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_status_codes() {
		let not_found = ApiError::Status {
			status: 404,
			body: String::new(),
		};
		assert!(not_found.is_client_error());
		assert!(not_found.is_not_found());
		assert!(!not_found.is_server_error());

		let unavailable = ApiError::Status {
			status: 503,
			body: String::from("maintenance"),
		};
		assert!(unavailable.is_server_error());
		assert!(!ApiError::Transport(String::from("offline")).is_client_error());
	}
}
