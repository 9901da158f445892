// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Name of the `<meta>` tag the server renders the settings into.
pub const SETTINGS_META_NAME: &str = "appeal-console-settings";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The part of the host configuration the browser needs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientSettings {
	pub api_base_url: String,
	pub files_base_url: String,
	pub page_size: u32,
}

impl Default for ClientSettings {
	fn default() -> Self {
		Self {
			api_base_url: String::from("/api/"),
			files_base_url: String::new(),
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl ClientSettings {
	/// Settings for the current render: the server's context during SSR, the rendered meta tag in the browser.
	pub fn current() -> Self {
		#[cfg(feature = "hydrate")]
		{
			if let Some(settings) = Self::from_document() {
				return settings;
			}
		}
		use_context::<ClientSettings>().unwrap_or_default()
	}

	pub fn to_meta_content(&self) -> String {
		serde_json::to_string(self).unwrap_or_default()
	}

	pub fn from_meta_content(content: &str) -> Option<Self> {
		match serde_json::from_str(content) {
			Ok(settings) => Some(settings),
			Err(error) => {
				leptos::logging::warn!("Unreadable client settings: {error}");
				None
			}
		}
	}

	#[cfg(feature = "hydrate")]
	fn from_document() -> Option<Self> {
		let selector = format!("meta[name=\"{}\"]", SETTINGS_META_NAME);
		let element = document().query_selector(&selector).ok()??;
		let content = element.get_attribute("content")?;
		Self::from_meta_content(&content)
	}

	/// Turns a stored file path into a link on the file host. Absolute URLs are left alone.
	pub fn file_url(&self, path: &str) -> String {
		if path.starts_with("http") {
			return path.to_string();
		}
		let host = self.files_base_url.trim_end_matches('/');
		if path.starts_with('/') {
			format!("{}{}", host, path)
		} else {
			format!("{}/{}", host, path)
		}
	}
}

/// The settings provided by the app root.
pub fn use_settings() -> ClientSettings {
	use_context::<ClientSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn settings() -> ClientSettings {
		ClientSettings {
			api_base_url: String::from("https://eappeal.uz/api/v1/"),
			files_base_url: String::from("https://eappeal.uz"),
			page_size: 10,
		}
	}

	#[test]
	fn relative_file_paths_get_the_file_host() {
		let settings = settings();
		assert_eq!(
			settings.file_url("/media/appeals/scan.pdf"),
			"https://eappeal.uz/media/appeals/scan.pdf"
		);
		assert_eq!(settings.file_url("media/a.jpg"), "https://eappeal.uz/media/a.jpg");
		assert_eq!(
			settings.file_url("https://cdn.example.com/a.jpg"),
			"https://cdn.example.com/a.jpg"
		);
	}

	#[test]
	fn meta_content_survives_the_page() {
		let settings = settings();
		let content = settings.to_meta_content();
		assert_eq!(ClientSettings::from_meta_content(&content), Some(settings));
		assert_eq!(ClientSettings::from_meta_content("not json"), None);
	}
}
