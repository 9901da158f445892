// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reactive access to the resource APIs.
//!
//! Every read hook subscribes to its cache namespace. When a mutation invalidates the namespace, the
//! [QueryClient] notifies the subscribers and each read runs again, which goes back to the backend because its
//! cache entry is gone.

use crate::api::cache::Namespace;
use crate::api::{Api, ApiError, Params, ResourceApi};
use leptos::prelude::*;
use leptos::task::spawn_local;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

#[derive(Clone)]
pub struct QueryClient {
	api: Api,
	triggers: Arc<Mutex<HashMap<Namespace, ArcTrigger>>>,
}

impl QueryClient {
	pub fn new(api: Api) -> Self {
		let triggers: Arc<Mutex<HashMap<Namespace, ArcTrigger>>> = Arc::default();
		let notify_triggers = Arc::clone(&triggers);
		api.cache.subscribe(move |namespace| {
			let trigger = notify_triggers.lock().get(namespace).cloned();
			if let Some(trigger) = trigger {
				trigger.notify();
			}
		});
		Self { api, triggers }
	}

	pub fn api(&self) -> &Api {
		&self.api
	}

	/// Makes the running reactive computation rerun whenever `namespace` is invalidated.
	pub fn track(&self, namespace: Namespace) {
		let trigger = self.triggers.lock().entry(namespace).or_insert_with(ArcTrigger::new).clone();
		trigger.track();
	}
}

pub fn provide_query_client(api: Api) -> QueryClient {
	let client = QueryClient::new(api);
	provide_context(client.clone());
	client
}

pub fn use_query_client() -> QueryClient {
	expect_context::<QueryClient>()
}

pub fn use_api() -> Api {
	use_query_client().api().clone()
}

/// A read that reruns when the signals `fetch` reads change or when `namespace` is invalidated.
pub fn use_query<T, Fut>(namespace: Namespace, fetch: impl Fn() -> Fut + 'static) -> LocalResource<Result<T, ApiError>>
where
	T: 'static,
	Fut: Future<Output = Result<T, ApiError>> + 'static,
{
	let client = use_query_client();
	LocalResource::new(move || {
		client.track(namespace);
		fetch()
	})
}

/// The collection of a resource, filtered by whatever `params` currently returns.
pub fn use_list<T, L>(
	resource: ResourceApi<T, L>,
	params: impl Fn() -> Params + 'static,
) -> LocalResource<Result<L, ApiError>>
where
	T: DeserializeOwned + 'static,
	L: DeserializeOwned + 'static,
{
	let namespace = resource.namespace();
	use_query(namespace, move || {
		let resource = resource.clone();
		let params = params();
		async move { resource.list(&params).await }
	})
}

pub fn use_item<T, L>(resource: ResourceApi<T, L>, id: i64) -> LocalResource<Result<T, ApiError>>
where
	T: DeserializeOwned + 'static,
	L: DeserializeOwned + 'static,
{
	let namespace = resource.namespace();
	use_query(namespace, move || {
		let resource = resource.clone();
		async move { resource.get(id).await }
	})
}

/// Runs one write at a time and exposes whether it's still going.
#[derive(Clone, Copy)]
pub struct Mutation {
	pending: RwSignal<bool>,
}

impl Mutation {
	pub fn new() -> Self {
		Self {
			pending: RwSignal::new(false),
		}
	}

	pub fn pending(&self) -> Signal<bool> {
		self.pending.into()
	}

	/// Starts `task` unless a previous one is still running, then hands its outcome to `on_done`.
	pub fn run<T, Fut>(&self, task: Fut, on_done: impl FnOnce(Result<T, ApiError>) + 'static)
	where
		T: 'static,
		Fut: Future<Output = Result<T, ApiError>> + 'static,
	{
		if self.pending.get_untracked() {
			return;
		}
		self.pending.set(true);
		let pending = self.pending;
		spawn_local(async move {
			let result = task.await;
			if let Err(error) = &result {
				leptos::logging::warn!("Mutation failed: {error}");
			}
			let _ = pending.try_set(false);
			on_done(result);
		});
	}
}

impl Default for Mutation {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(all(test, not(feature = "ssr")))]
mod tests {
	use super::*;
	use crate::api::testing::SpyTransport;
	use crate::api::{ApiClient, QueryCache};
	use crate::pagination::with_page;
	use any_spawner::Executor;
	use serde_json::{Value, json};
	use tokio::task::LocalSet;

	fn staff_page() -> Value {
		json!({
			"limit": 10,
			"offset": 0,
			"count": 1,
			"next": null,
			"previous": null,
			"results": [{ "id": 7, "full_name": "Bobur", "phone": "+998", "email": "b@e.uz" }]
		})
	}

	/// Lets spawned reactive work run until `condition` holds or the attempts run out.
	async fn settle(condition: impl Fn() -> bool) -> bool {
		for _ in 0..100 {
			if condition() {
				return true;
			}
			Executor::tick().await;
		}
		condition()
	}

	fn offsets(spy: &SpyTransport) -> Vec<String> {
		spy.requests()
			.iter()
			.filter_map(|request| request.query.iter().find(|(name, _)| name == "offset"))
			.map(|(_, value)| value.clone())
			.collect()
	}

	#[tokio::test]
	async fn list_reruns_when_params_change() {
		_ = Executor::init_tokio();
		let owner = Owner::new();
		owner.set();
		LocalSet::new()
			.run_until(async {
				let spy = SpyTransport::new();
				spy.respond_always(200, staff_page());
				let client = provide_query_client(Api::new(ApiClient::new(spy.clone()), QueryCache::new()));
				let page = RwSignal::new(1);
				let staff = use_list(client.api().staff.clone(), move || with_page(Params::new(), page.get(), 10));

				assert!(settle(|| staff.get_untracked().is_some()).await);
				assert_eq!(spy.request_count(), 1);

				page.set(3);
				assert!(settle(|| spy.request_count() == 2).await);
				assert_eq!(offsets(&spy), ["0", "20"]);
			})
			.await;
	}

	#[tokio::test]
	async fn list_reruns_after_its_namespace_is_invalidated() {
		_ = Executor::init_tokio();
		let owner = Owner::new();
		owner.set();
		LocalSet::new()
			.run_until(async {
				let spy = SpyTransport::new();
				spy.respond_always(200, staff_page());
				let client = provide_query_client(Api::new(ApiClient::new(spy.clone()), QueryCache::new()));
				let staff = use_list(client.api().staff.clone(), Params::new);
				assert!(settle(|| staff.get_untracked().is_some()).await);

				client.api().appeals.cache().invalidate_collections("appeals");
				for _ in 0..10 {
					Executor::tick().await;
				}
				assert_eq!(spy.request_count(), 1);

				client.api().staff.delete(7).await.unwrap();
				assert!(settle(|| spy.request_count() == 3).await);
				let paths: Vec<String> = spy.requests().into_iter().map(|request| request.path).collect();
				assert_eq!(paths, ["staff/list", "staff/7/delete/", "staff/list"]);
			})
			.await;
	}

	#[tokio::test]
	async fn mutation_ignores_runs_while_pending() {
		_ = Executor::init_tokio();
		let owner = Owner::new();
		owner.set();
		LocalSet::new()
			.run_until(async {
				let mutation = Mutation::new();
				let outcomes = Arc::new(Mutex::new(Vec::new()));
				let (release, released) = futures::channel::oneshot::channel::<()>();

				let sink = Arc::clone(&outcomes);
				mutation.run(
					async move {
						let _ = released.await;
						Ok::<_, ApiError>(1)
					},
					move |result| sink.lock().push(result),
				);
				assert!(mutation.pending().get_untracked());

				let sink = Arc::clone(&outcomes);
				mutation.run(async { Ok::<_, ApiError>(2) }, move |result| sink.lock().push(result));

				let _ = release.send(());
				assert!(settle(|| !mutation.pending().get_untracked()).await);
				assert_eq!(*outcomes.lock(), vec![Ok(1)]);

				let sink = Arc::clone(&outcomes);
				mutation.run(async { Ok::<_, ApiError>(3) }, move |result| sink.lock().push(result));
				assert!(settle(|| outcomes.lock().len() == 2).await);
				assert_eq!(*outcomes.lock(), vec![Ok(1), Ok(3)]);
			})
			.await;
	}
}
