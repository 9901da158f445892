// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use appeal_console::config::parse_config;
	use appeal_console::web::server::run_server;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = Arc::new(parse_config(&config_path).await?);
	tracing::info!(path = %config_path, api = %config.api.base_url, "Loaded configuration");

	run_server(config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
