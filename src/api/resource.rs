// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The resource factory: one list endpoint and one cache namespace in, a full set of cached reads and
//! self-invalidating mutations out.

use super::Params;
use super::cache::{Namespace, QueryCache, QueryKey};
use super::client::{ApiClient, MultipartField};
use super::error::ApiError;
use crate::model::Paginated;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Path templates for one entity. `{id}` is replaced with the record id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Endpoints {
	pub list: &'static str,
	pub item: &'static str,
	pub create: &'static str,
	pub update: &'static str,
	pub delete: &'static str,
}

impl Endpoints {
	pub fn item_path(&self, id: i64) -> String {
		fill_id(self.item, id)
	}

	pub fn update_path(&self, id: i64) -> String {
		fill_id(self.update, id)
	}

	pub fn delete_path(&self, id: i64) -> String {
		fill_id(self.delete, id)
	}
}

fn fill_id(template: &str, id: i64) -> String {
	template.replace("{id}", &id.to_string())
}

/// Data access for one entity type. `T` is the record, `L` what the list endpoint returns.
///
/// Reads go through the shared cache. Successful mutations invalidate:
/// - create: every collection entry of the namespace
/// - update: every collection entry of the namespace and the item entry of the updated id
/// - delete: every collection entry of the namespace
pub struct ResourceApi<T, L = Paginated<T>> {
	namespace: Namespace,
	endpoints: Endpoints,
	client: ApiClient,
	cache: QueryCache,
	_records: PhantomData<fn() -> (T, L)>,
}

impl<T, L> Clone for ResourceApi<T, L> {
	fn clone(&self) -> Self {
		Self {
			namespace: self.namespace,
			endpoints: self.endpoints,
			client: self.client.clone(),
			cache: self.cache.clone(),
			_records: PhantomData,
		}
	}
}

impl<T, L> ResourceApi<T, L>
where
	T: DeserializeOwned,
	L: DeserializeOwned,
{
	pub fn new(namespace: Namespace, endpoints: Endpoints, client: ApiClient, cache: QueryCache) -> Self {
		Self {
			namespace,
			endpoints,
			client,
			cache,
			_records: PhantomData,
		}
	}

	pub fn namespace(&self) -> Namespace {
		self.namespace
	}

	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	pub fn client(&self) -> &ApiClient {
		&self.client
	}

	pub fn cache(&self) -> &QueryCache {
		&self.cache
	}

	/// Reads the collection filtered by `params`; the params go to the backend unmodified.
	pub async fn list(&self, params: &Params) -> Result<L, ApiError> {
		let key = QueryKey::list(self.namespace, params.clone());
		let value = self
			.cache
			.fetch(key, || self.client.get_json::<Value>(self.endpoints.list, params))
			.await?;
		Ok(serde_json::from_value(value)?)
	}

	pub async fn get(&self, id: i64) -> Result<T, ApiError> {
		let path = self.endpoints.item_path(id);
		let no_params = Params::new();
		let value = self
			.cache
			.fetch(QueryKey::item(self.namespace, id), || {
				self.client.get_json::<Value>(&path, &no_params)
			})
			.await?;
		Ok(serde_json::from_value(value)?)
	}

	/// Reads a namespace-wide summary that is refreshed together with the collection.
	pub async fn aggregate<A: DeserializeOwned>(&self, name: &'static str, path: &str) -> Result<A, ApiError> {
		let no_params = Params::new();
		let value = self
			.cache
			.fetch(QueryKey::aggregate(self.namespace, name), || {
				self.client.get_json::<Value>(path, &no_params)
			})
			.await?;
		Ok(serde_json::from_value(value)?)
	}

	pub async fn create<B: Serialize>(&self, payload: &B) -> Result<T, ApiError> {
		let created = self.client.post_json(self.endpoints.create, payload).await?;
		self.cache.invalidate_collections(self.namespace);
		Ok(created)
	}

	/// Creates a record from a multipart form, for payloads carrying files.
	pub async fn create_multipart(&self, fields: Vec<MultipartField>) -> Result<T, ApiError> {
		let created = self.client.post_multipart(self.endpoints.create, fields).await?;
		self.cache.invalidate_collections(self.namespace);
		Ok(created)
	}

	pub async fn update<B: Serialize>(&self, id: i64, payload: &B) -> Result<T, ApiError> {
		let updated = self
			.client
			.put_json(&self.endpoints.update_path(id), payload)
			.await?;
		self.cache.invalidate_collections(self.namespace);
		self.cache.invalidate_item(self.namespace, id);
		Ok(updated)
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&self.endpoints.delete_path(id)).await?;
		self.cache.invalidate_collections(self.namespace);
		Ok(())
	}
}
