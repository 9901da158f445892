// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod appeals;
pub mod auth;
pub mod cache;
pub mod categories;
pub mod client;
pub mod error;
pub mod resource;
pub mod responses;
pub mod staff;
pub mod testing;

use std::collections::BTreeMap;

pub use cache::{QueryCache, QueryKey};
pub use client::{ApiClient, Attachment};
pub use error::ApiError;
pub use resource::{Endpoints, ResourceApi};

/// Query parameters of a list read. Ordered, so equal filters always produce equal cache keys.
pub type Params = BTreeMap<String, String>;

/// Every entity API sharing one client and one cache.
#[derive(Clone)]
pub struct Api {
	pub client: ApiClient,
	pub cache: QueryCache,
	pub appeals: appeals::AppealsApi,
	pub categories: categories::CategoriesApi,
	pub responses: responses::ResponsesApi,
	pub staff: staff::StaffApi,
}

impl Api {
	pub fn new(client: ApiClient, cache: QueryCache) -> Self {
		Self {
			appeals: ResourceApi::new(appeals::NAMESPACE, appeals::ENDPOINTS, client.clone(), cache.clone()),
			categories: ResourceApi::new(
				categories::NAMESPACE,
				categories::ENDPOINTS,
				client.clone(),
				cache.clone(),
			),
			responses: ResourceApi::new(responses::NAMESPACE, responses::ENDPOINTS, client.clone(), cache.clone()),
			staff: ResourceApi::new(staff::NAMESPACE, staff::ENDPOINTS, client.clone(), cache.clone()),
			client,
			cache,
		}
	}
}
