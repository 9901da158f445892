// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records mirrored from the appeals backend.
//!
//! These types carry no lifecycle of their own on the client; they're fetched, cached under their namespace and
//! dropped when the cache entry is invalidated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of statuses an appeal moves through.
///
/// The backend speaks in the Russian labels, so those are both the wire form and the display form.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AppealStatus {
	#[serde(rename = "Рассматривается")]
	UnderReview,
	#[serde(rename = "Принято")]
	Accepted,
	#[serde(rename = "Отправлено")]
	Sent,
	#[serde(rename = "Отказано")]
	Rejected,
}

impl AppealStatus {
	pub const ALL: [AppealStatus; 4] = [Self::UnderReview, Self::Accepted, Self::Sent, Self::Rejected];

	/// Statuses a staff member may pick when answering an appeal.
	pub const ANSWER_CHOICES: [AppealStatus; 2] = [Self::Accepted, Self::Rejected];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::UnderReview => "Рассматривается",
			Self::Accepted => "Принято",
			Self::Sent => "Отправлено",
			Self::Rejected => "Отказано",
		}
	}
}

impl fmt::Display for AppealStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown appeal status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppealStatus {
	type Err = UnknownStatus;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str() == value)
			.ok_or_else(|| UnknownStatus(value.to_string()))
	}
}

/// A record with a backend-assigned identifier.
pub trait Record {
	fn id(&self) -> i64;
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Sender {
	pub full_name: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	pub region: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryRef {
	pub id: i64,
	pub name: String,
}

/// A stored attachment. `file` is the path (or absolute URL) on the file host.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StoredFile {
	pub id: i64,
	pub file: String,
}

/// The response embedded in an appeal record.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AppealAnswer {
	pub id: i64,
	pub text: String,
	pub status: String,
	pub created_at: String,
	#[serde(default)]
	pub answerer: Option<i64>,
	#[serde(default)]
	pub response_files: Vec<StoredFile>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Appeal {
	pub id: i64,
	pub reference_number: String,
	#[serde(default)]
	pub region: String,
	pub text: String,
	pub status: AppealStatus,
	pub sender_quantity: i64,
	pub category: CategoryRef,
	#[serde(default)]
	pub appeal_files: Vec<StoredFile>,
	#[serde(default)]
	pub appeal_response: Option<AppealAnswer>,
	pub sender: Sender,
	pub created_at: String,
}

impl Appeal {
	/// The region to show for an appeal: its own, else the sender's.
	pub fn display_region(&self) -> Option<&str> {
		[self.region.as_str(), self.sender.region.as_str()]
			.into_iter()
			.find(|region| !region.is_empty())
	}
}

/// Fields of an appeal staff are allowed to change.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AppealUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<AppealStatus>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub region: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StatusTotal {
	pub status: String,
	pub total: i64,
}

/// Per-status appeal counters.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AppealsDashboard {
	pub appeal: Vec<StatusTotal>,
	pub total_appeal: i64,
}

impl AppealsDashboard {
	pub fn total_for(&self, status: AppealStatus) -> i64 {
		self.appeal
			.iter()
			.filter(|entry| entry.status == status.as_str())
			.map(|entry| entry.total)
			.sum()
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AppealCategory {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryPayload {
	pub name: String,
}

/// Snapshot of the appeal a response belongs to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AppealReference {
	pub id: i64,
	pub reference_number: String,
	pub status: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Response {
	pub id: i64,
	pub appeal: AppealReference,
	#[serde(default)]
	pub reference_number: String,
	pub text: String,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub answerer: Option<i64>,
	#[serde(default)]
	pub response_files: Vec<StoredFile>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResponsePayload {
	pub appeal: i64,
	pub text: String,
	pub status: AppealStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub answerer: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Staff {
	pub id: i64,
	pub full_name: String,
	pub phone: String,
	pub email: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StaffPayload {
	pub full_name: String,
	pub phone: String,
	pub email: String,
}

impl Record for Appeal {
	fn id(&self) -> i64 {
		self.id
	}
}

impl Record for AppealCategory {
	fn id(&self) -> i64 {
		self.id
	}
}

impl Record for Response {
	fn id(&self) -> i64 {
		self.id
	}
}

impl Record for Staff {
	fn id(&self) -> i64 {
		self.id
	}
}

/// The envelope every paginated list endpoint answers with.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Paginated<T> {
	#[serde(default)]
	pub limit: Option<i64>,
	#[serde(default)]
	pub offset: Option<i64>,
	pub count: u64,
	#[serde(default)]
	pub next: Option<String>,
	#[serde(default)]
	pub previous: Option<String>,
	pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
	fn default() -> Self {
		Self {
			limit: None,
			offset: None,
			count: 0,
			next: None,
			previous: None,
			results: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn appeal_json(status: &str) -> serde_json::Value {
		json!({
			"id": 3,
			"reference_number": "A-0003",
			"region": "",
			"text": "Broken street light",
			"status": status,
			"sender_quantity": 1,
			"category": { "id": 1, "name": "Infrastructure" },
			"appeal_files": [{ "id": 9, "file": "/media/appeals/photo.jpg" }],
			"appeal_response": null,
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

	#[test]
	fn appeal_decodes_with_known_status() {
		let appeal: Appeal = serde_json::from_value(appeal_json("Принято")).unwrap();
		assert_eq!(appeal.status, AppealStatus::Accepted);
		assert!(appeal.appeal_response.is_none());
		assert_eq!(appeal.display_region(), Some("Tashkent"));
	}

	#[test]
	fn appeal_with_unknown_status_is_rejected() {
		let result: Result<Appeal, _> = serde_json::from_value(appeal_json("Archived"));
		assert!(result.is_err());
	}

	#[test]
	fn status_parses_from_wire_label() {
		assert_eq!("Отказано".parse::<AppealStatus>(), Ok(AppealStatus::Rejected));
		assert_eq!(
			"Closed".parse::<AppealStatus>(),
			Err(UnknownStatus(String::from("Closed")))
		);
	}

	#[test]
	fn appeal_update_only_sends_set_fields() {
		let update = AppealUpdate {
			status: Some(AppealStatus::Sent),
			region: None,
		};
		assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "status": "Отправлено" }));
	}

	#[test]
	fn dashboard_totals_by_status() {
		let dashboard: AppealsDashboard = serde_json::from_value(json!({
			"appeal": [
				{ "status": "Принято", "total": 4 },
				{ "status": "Отказано", "total": 1 }
			],
			"total_appeal": 5
		}))
		.unwrap();
		assert_eq!(dashboard.total_for(AppealStatus::Accepted), 4);
		assert_eq!(dashboard.total_for(AppealStatus::Sent), 0);
	}
}
