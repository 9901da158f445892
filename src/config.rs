// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::settings::{ClientSettings, DEFAULT_PAGE_SIZE};
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = section(&document, "web")?;
	let bind_addr = required_string(web, "web", "bind_addr")?;

	let api = section(&document, "api")?;
	let base_url = required_string(api, "api", "base_url")?;
	let files_base_url = match api.get_arg("files_base_url") {
		Some(value) => value
			.as_string()
			.ok_or_else(|| miette!("api.files_base_url must be a string"))?
			.to_string(),
		None => origin_of(&base_url).to_string(),
	};
	let page_size = match api.get_arg("page_size") {
		Some(value) => value
			.as_integer()
			.and_then(|size| u32::try_from(size).ok())
			.filter(|size| *size > 0)
			.ok_or_else(|| miette!("api.page_size must be a positive integer"))?,
		None => DEFAULT_PAGE_SIZE,
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		api: ApiConfig {
			base_url,
			files_base_url,
			page_size,
		},
	})
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	document
		.get(name)
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("Missing the {} block in the configuration", name))
}

fn required_string(section: &KdlDocument, section_name: &str, name: &str) -> Result<String> {
	section
		.get_arg(name)
		.and_then(|value| value.as_string())
		.map(String::from)
		.ok_or_else(|| miette!("{}.{} must be set to a string", section_name, name))
}

/// The scheme and host part of a URL, without any path.
fn origin_of(url: &str) -> &str {
	let Some(scheme_end) = url.find("://") else {
		return "";
	};
	let host_start = scheme_end + 3;
	match url[host_start..].find('/') {
		Some(path_start) => &url[..host_start + path_start],
		None => url,
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigData {
	pub web: WebConfig,
	pub api: ApiConfig,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiConfig {
	pub base_url: String,
	pub files_base_url: String,
	pub page_size: u32,
}

impl ConfigData {
	pub fn client_settings(&self) -> ClientSettings {
		ClientSettings {
			api_base_url: self.api.base_url.clone(),
			files_base_url: self.api.files_base_url.clone(),
			page_size: self.api.page_size,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_document() {
		let config = parse_config_document(
			r#"
			web {
				bind_addr "127.0.0.1:3000"
			}
			api {
				base_url "https://eappeal.uz/api/v1/"
				files_base_url "https://files.eappeal.uz"
				page_size 25
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
		assert_eq!(config.api.base_url, "https://eappeal.uz/api/v1/");
		assert_eq!(config.api.files_base_url, "https://files.eappeal.uz");
		assert_eq!(config.api.page_size, 25);
	}

	#[test]
	fn optional_settings_fall_back() {
		let config = parse_config_document(
			r#"
			web {
				bind_addr "0.0.0.0:8080"
			}
			api {
				base_url "https://eappeal.uz/api/v1/"
			}
			"#,
		)
		.unwrap();

		let settings = config.client_settings();
		assert_eq!(settings.files_base_url, "https://eappeal.uz");
		assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
		assert_eq!(settings.api_base_url, "https://eappeal.uz/api/v1/");
	}

	#[test]
	fn missing_required_values_are_reported() {
		assert!(parse_config_document("api {\n\tbase_url \"https://eappeal.uz/api/v1/\"\n}\n").is_err());
		assert!(parse_config_document("web {\n\tbind_addr \"127.0.0.1:3000\"\n}\napi {\n}\n").is_err());
	}

	#[test]
	fn page_size_must_be_positive() {
		let result = parse_config_document(
			"web {\n\tbind_addr \"127.0.0.1:3000\"\n}\napi {\n\tbase_url \"https://eappeal.uz/api/v1/\"\n\tpage_size 0\n}\n",
		);
		assert!(result.is_err());
	}

	#[test]
	fn origins() {
		assert_eq!(origin_of("https://eappeal.uz/api/v1/"), "https://eappeal.uz");
		assert_eq!(origin_of("http://localhost:8000"), "http://localhost:8000");
		assert_eq!(origin_of("/api/"), "");
	}
}
