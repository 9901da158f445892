// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::browser;
use crate::api::{ApiClient, ApiError};
use leptos::prelude::*;

const TOKEN_STORAGE_KEY: &str = "access_token";

/// The signed-in state of the console.
///
/// The token lives in browser storage, so it's only known once the client has hydrated. Until then
/// [Session::authenticated] reports `None` and guarded routes render nothing rather than redirecting.
#[derive(Clone)]
pub struct Session {
	client: ApiClient,
	token: RwSignal<Option<String>>,
	restored: RwSignal<bool>,
}

impl Session {
	pub fn new(client: ApiClient) -> Self {
		Self {
			client,
			token: RwSignal::new(None),
			restored: RwSignal::new(false),
		}
	}

	/// Loads a token saved by an earlier visit. Runs in the browser after hydration.
	pub fn restore(&self) {
		let token = browser::load_item(TOKEN_STORAGE_KEY);
		self.client.set_token(token.clone());
		self.token.set(token);
		self.restored.set(true);
	}

	pub fn authenticated(&self) -> Option<bool> {
		if !self.restored.get() {
			return None;
		}
		Some(self.token.with(Option::is_some))
	}

	pub fn sign_in(&self, token: String) {
		browser::store_item(TOKEN_STORAGE_KEY, Some(&token));
		self.client.set_token(Some(token.clone()));
		self.token.set(Some(token));
		self.restored.set(true);
	}

	pub fn sign_out(&self) {
		browser::store_item(TOKEN_STORAGE_KEY, None);
		self.client.set_token(None);
		self.token.set(None);
	}

	/// Signs out when the backend no longer accepts the token. Returns whether it did.
	pub fn handle_error(&self, error: &ApiError) -> bool {
		if error.is_unauthorized() {
			leptos::logging::log!("Access token rejected; signing out");
			self.sign_out();
			return true;
		}
		false
	}
}

pub fn use_session() -> Session {
	expect_context::<Session>()
}
