// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The in-memory request cache.
//!
//! Entries are keyed by an entity namespace plus a scope: the filter parameters of a list read, the id of an item
//! read, or the name of an aggregate (such as the appeals dashboard). Values are kept as JSON so one cache serves
//! every entity type. Nothing expires on its own; entries only leave through the invalidation calls.

use super::Params;
use super::error::ApiError;
use futures::channel::oneshot;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

pub type Namespace = &'static str;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyScope {
	List(Params),
	Item(i64),
	Aggregate(&'static str),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct QueryKey {
	pub namespace: Namespace,
	pub scope: KeyScope,
}

impl QueryKey {
	pub fn list(namespace: Namespace, params: Params) -> Self {
		Self {
			namespace,
			scope: KeyScope::List(params),
		}
	}

	pub fn item(namespace: Namespace, id: i64) -> Self {
		Self {
			namespace,
			scope: KeyScope::Item(id),
		}
	}

	pub fn aggregate(namespace: Namespace, name: &'static str) -> Self {
		Self {
			namespace,
			scope: KeyScope::Aggregate(name),
		}
	}

	/// Whether this entry describes the collection as a whole rather than a single record.
	pub fn is_collection(&self) -> bool {
		matches!(self.scope, KeyScope::List(_) | KeyScope::Aggregate(_))
	}
}

type Waiter = oneshot::Sender<Result<Value, ApiError>>;
type Listener = Arc<dyn Fn(Namespace) + Send + Sync>;

type FlightId = u64;

#[derive(Default)]
struct InFlight {
	waiters: Vec<Waiter>,
	/// Set when the key is invalidated while the read is running; the result is then delivered but not stored.
	stale: bool,
}

#[derive(Default)]
struct CacheState {
	entries: HashMap<QueryKey, Value>,
	/// The load new reads of a key should join. Invalidation detaches a key from its load.
	in_flight: HashMap<QueryKey, FlightId>,
	flights: HashMap<FlightId, InFlight>,
	next_flight: FlightId,
}

impl CacheState {
	fn start_flight(&mut self, key: QueryKey) -> FlightId {
		let id = self.next_flight;
		self.next_flight += 1;
		self.in_flight.insert(key, id);
		self.flights.insert(id, InFlight::default());
		id
	}

	fn end_flight(&mut self, key: &QueryKey, id: FlightId) -> InFlight {
		if self.in_flight.get(key) == Some(&id) {
			self.in_flight.remove(key);
		}
		self.flights.remove(&id).unwrap_or_default()
	}
}

/// Shared handle to the request cache. Clones refer to the same cache.
#[derive(Clone, Default)]
pub struct QueryCache {
	state: Arc<Mutex<CacheState>>,
	listeners: Arc<Mutex<Vec<Listener>>>,
}

enum Plan {
	Cached(Value),
	Follow(oneshot::Receiver<Result<Value, ApiError>>),
	Lead(FlightId),
}

impl QueryCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a callback run with the namespace after every invalidation touching it.
	pub fn subscribe(&self, listener: impl Fn(Namespace) + Send + Sync + 'static) {
		self.listeners.lock().push(Arc::new(listener));
	}

	pub fn peek(&self, key: &QueryKey) -> Option<Value> {
		self.state.lock().entries.get(key).cloned()
	}

	pub fn contains(&self, key: &QueryKey) -> bool {
		self.state.lock().entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.state.lock().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the cached value for `key`, or runs `loader` to produce it.
	///
	/// Identical reads issued while a load is running wait for that load instead of starting their own. Reads
	/// issued after the key was invalidated start a new load.
	pub async fn fetch<F, Fut>(&self, key: QueryKey, loader: F) -> Result<Value, ApiError>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<Value, ApiError>>,
	{
		let plan = {
			let mut guard = self.state.lock();
			let state = &mut *guard;
			if let Some(value) = state.entries.get(&key) {
				Plan::Cached(value.clone())
			} else if let Some(flight) = state
				.in_flight
				.get(&key)
				.copied()
				.and_then(|id| state.flights.get_mut(&id))
			{
				let (sender, receiver) = oneshot::channel();
				flight.waiters.push(sender);
				Plan::Follow(receiver)
			} else {
				Plan::Lead(state.start_flight(key.clone()))
			}
		};

		match plan {
			Plan::Cached(value) => {
				tracing::trace!(namespace = key.namespace, scope = ?key.scope, "cache hit");
				Ok(value)
			}
			Plan::Follow(receiver) => receiver.await.unwrap_or(Err(ApiError::Cancelled)),
			Plan::Lead(id) => {
				let guard = FlightGuard {
					cache: self,
					key: Some(key),
					id,
				};
				let result = loader().await;
				guard.complete(&result);
				result
			}
		}
	}

	/// Drops every list and aggregate entry of `namespace`. Item entries stay.
	pub fn invalidate_collections(&self, namespace: Namespace) -> usize {
		self.invalidate_where(namespace, QueryKey::is_collection)
	}

	/// Drops the item entry for `id` in `namespace`.
	pub fn invalidate_item(&self, namespace: Namespace, id: i64) -> usize {
		self.invalidate_where(namespace, |key| key.scope == KeyScope::Item(id))
	}

	/// Drops every entry of `namespace`.
	pub fn invalidate_namespace(&self, namespace: Namespace) -> usize {
		self.invalidate_where(namespace, |_| true)
	}

	fn invalidate_where(&self, namespace: Namespace, matches: impl Fn(&QueryKey) -> bool) -> usize {
		let removed = {
			let mut guard = self.state.lock();
			let state = &mut *guard;
			let before = state.entries.len();
			state
				.entries
				.retain(|key, _| key.namespace != namespace || !matches(key));
			let detached: Vec<FlightId> = state
				.in_flight
				.iter()
				.filter(|(key, _)| key.namespace == namespace && matches(key))
				.map(|(_, id)| *id)
				.collect();
			state
				.in_flight
				.retain(|key, _| key.namespace != namespace || !matches(key));
			for id in detached {
				if let Some(flight) = state.flights.get_mut(&id) {
					flight.stale = true;
				}
			}
			before - state.entries.len()
		};
		tracing::debug!(namespace, removed, "invalidated cache entries");

		let listeners: Vec<Listener> = self.listeners.lock().clone();
		for listener in listeners {
			listener(namespace);
		}
		removed
	}
}

/// Owns the in-flight slot of a leading read. If the read is dropped before it finishes, the slot is released and
/// any followers see [ApiError::Cancelled].
struct FlightGuard<'a> {
	cache: &'a QueryCache,
	key: Option<QueryKey>,
	id: FlightId,
}

impl FlightGuard<'_> {
	fn complete(mut self, result: &Result<Value, ApiError>) {
		let Some(key) = self.key.take() else {
			return;
		};
		let flight = {
			let mut guard = self.cache.state.lock();
			let state = &mut *guard;
			let flight = state.end_flight(&key, self.id);
			if let Ok(value) = result {
				if !flight.stale {
					state.entries.insert(key, value.clone());
				}
			}
			flight
		};
		for waiter in flight.waiters {
			let _ = waiter.send(result.clone());
		}
	}
}

impl Drop for FlightGuard<'_> {
	fn drop(&mut self) {
		if let Some(key) = self.key.take() {
			self.cache.state.lock().end_flight(&key, self.id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::poll;
	use serde_json::json;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn status_params(status: &str) -> Params {
		Params::from([(String::from("status"), status.to_string())])
	}

	#[tokio::test]
	async fn second_read_is_served_from_cache() {
		let cache = QueryCache::new();
		let calls = AtomicUsize::new(0);
		let key = QueryKey::list("staff", Params::new());

		for _ in 0..2 {
			let value = cache
				.fetch(key.clone(), || async {
					calls.fetch_add(1, Ordering::SeqCst);
					Ok(json!({ "count": 0 }))
				})
				.await
				.unwrap();
			assert_eq!(value, json!({ "count": 0 }));
		}
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn different_params_are_different_entries() {
		let cache = QueryCache::new();
		cache
			.fetch(QueryKey::list("appeals", status_params("Принято")), || async { Ok(json!(1)) })
			.await
			.unwrap();
		cache
			.fetch(QueryKey::list("appeals", status_params("Отказано")), || async { Ok(json!(2)) })
			.await
			.unwrap();
		assert_eq!(cache.len(), 2);
	}

	#[tokio::test]
	async fn concurrent_identical_reads_share_one_load() {
		let cache = QueryCache::new();
		let calls = AtomicUsize::new(0);
		let key = QueryKey::item("appeals", 4);

		let load = || async {
			calls.fetch_add(1, Ordering::SeqCst);
			tokio::task::yield_now().await;
			Ok(json!({ "id": 4 }))
		};
		let (first, second) = tokio::join!(cache.fetch(key.clone(), load), cache.fetch(key.clone(), load));

		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(first, second);
		assert_eq!(first.unwrap(), json!({ "id": 4 }));
	}

	#[tokio::test]
	async fn failed_reads_are_not_cached() {
		let cache = QueryCache::new();
		let key = QueryKey::item("staff", 1);
		let result = cache
			.fetch(key.clone(), || async { Err(ApiError::Transport(String::from("offline"))) })
			.await;
		assert!(result.is_err());
		assert!(!cache.contains(&key));
	}

	#[tokio::test]
	async fn collection_invalidation_keeps_items() {
		let cache = QueryCache::new();
		let list = QueryKey::list("appeals", Params::new());
		let dashboard = QueryKey::aggregate("appeals", "dashboard");
		let item = QueryKey::item("appeals", 3);
		let other = QueryKey::list("staff", Params::new());
		for key in [&list, &dashboard, &item, &other] {
			cache.fetch(key.clone(), || async { Ok(Value::Null) }).await.unwrap();
		}

		assert_eq!(cache.invalidate_collections("appeals"), 2);
		assert!(!cache.contains(&list));
		assert!(!cache.contains(&dashboard));
		assert!(cache.contains(&item));
		assert!(cache.contains(&other));

		assert_eq!(cache.invalidate_item("appeals", 3), 1);
		assert!(!cache.contains(&item));
	}

	#[tokio::test]
	async fn invalidation_during_load_discards_result() {
		let cache = QueryCache::new();
		let key = QueryKey::list("responses", Params::new());
		let (release, released) = oneshot::channel::<()>();

		let read = cache.fetch(key.clone(), || async move {
			let _ = released.await;
			Ok(json!("old"))
		});
		let invalidate = async {
			tokio::task::yield_now().await;
			cache.invalidate_collections("responses");
			let _ = release.send(());
		};
		let (result, ()) = tokio::join!(read, invalidate);

		assert_eq!(result.unwrap(), json!("old"));
		assert!(!cache.contains(&key));
	}

	#[tokio::test]
	async fn read_after_invalidation_does_not_join_the_stale_load() {
		let cache = QueryCache::new();
		let key = QueryKey::list("staff", Params::new());
		let calls = AtomicUsize::new(0);
		let (release, released) = oneshot::channel::<()>();

		let mut stale = Box::pin(cache.fetch(key.clone(), || async {
			calls.fetch_add(1, Ordering::SeqCst);
			let _ = released.await;
			Ok(json!("old"))
		}));
		assert!(poll!(&mut stale).is_pending());

		cache.invalidate_collections("staff");
		let fresh = cache
			.fetch(key.clone(), || async {
				calls.fetch_add(1, Ordering::SeqCst);
				Ok(json!("new"))
			})
			.await;
		assert_eq!(fresh, Ok(json!("new")));
		assert_eq!(calls.load(Ordering::SeqCst), 2);

		let _ = release.send(());
		assert_eq!(stale.await, Ok(json!("old")));
		assert_eq!(cache.peek(&key), Some(json!("new")));
	}

	#[tokio::test]
	async fn dropped_leader_cancels_followers() {
		let cache = QueryCache::new();
		let key = QueryKey::item("staff", 9);

		let mut leader = Box::pin(cache.fetch(key.clone(), futures::future::pending));
		assert!(poll!(&mut leader).is_pending());
		let mut follower = Box::pin(cache.fetch(key.clone(), || async { Ok(Value::Null) }));
		assert!(poll!(&mut follower).is_pending());

		drop(leader);
		assert_eq!(follower.await, Err(ApiError::Cancelled));

		let retry = cache.fetch(key, || async { Ok(json!(9)) }).await;
		assert_eq!(retry, Ok(json!(9)));
	}

	#[tokio::test]
	async fn listeners_hear_about_invalidations() {
		let cache = QueryCache::new();
		let heard = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&heard);
		cache.subscribe(move |namespace| sink.lock().push(namespace));

		cache.invalidate_collections("staff");
		cache.invalidate_item("appeals", 1);
		assert_eq!(*heard.lock(), vec!["staff", "appeals"]);
	}
}
