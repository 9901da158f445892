// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::client::ApiClient;
use super::error::ApiError;
use serde::{Deserialize, Serialize};

const TOKEN_PATH: &str = "token/";

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TokenPair {
	pub access: String,
	#[serde(default)]
	pub refresh: Option<String>,
}

/// Exchanges credentials for a bearer token. The token isn't installed on the client; that's the session's job.
pub async fn obtain_token(client: &ApiClient, credentials: &Credentials) -> Result<TokenPair, ApiError> {
	client.post_json(TOKEN_PATH, credentials).await
}
