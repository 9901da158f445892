// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::cache::Namespace;
use super::error::ApiError;
use super::resource::{Endpoints, ResourceApi};
use crate::model::{Appeal, AppealUpdate, AppealsDashboard};

pub const NAMESPACE: Namespace = "appeals";

pub const ENDPOINTS: Endpoints = Endpoints {
	list: "appeals/list",
	item: "appeals/{id}",
	create: "appeals/create/",
	update: "appeals/{id}",
	delete: "appeals/{id}/delete/",
};

const DASHBOARD_PATH: &str = "appeals/dashboard/";

pub type AppealsApi = ResourceApi<Appeal>;

impl ResourceApi<Appeal> {
	/// Appeal counts per status. Cached alongside the appeal lists, so any appeal mutation refreshes it.
	pub async fn dashboard(&self) -> Result<AppealsDashboard, ApiError> {
		self.aggregate("dashboard", DASHBOARD_PATH).await
	}

	pub async fn update_appeal(&self, id: i64, update: &AppealUpdate) -> Result<Appeal, ApiError> {
		self.update(id, update).await
	}

	/// The generated PDF for an appeal. Binary downloads bypass the cache.
	pub async fn pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
		self.client().get_bytes(&format!("appeals/{}/pdf", id)).await
	}
}
