// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser-only capabilities. Outside the hydrated client these are inert, since there's no browser to talk to.

use crate::api::Attachment;
use leptos::ev::Event;

/// Reads a value from `localStorage`.
pub fn load_item(key: &str) -> Option<String> {
	#[cfg(feature = "hydrate")]
	{
		use leptos::prelude::window;
		let storage = window().local_storage().ok()??;
		storage.get_item(key).ok()?
	}
	#[cfg(not(feature = "hydrate"))]
	{
		let _ = key;
		None
	}
}

/// Writes a value to `localStorage`, or removes it when `value` is `None`.
pub fn store_item(key: &str, value: Option<&str>) {
	#[cfg(feature = "hydrate")]
	{
		use leptos::prelude::window;
		let Ok(Some(storage)) = window().local_storage() else {
			return;
		};
		let result = match value {
			Some(value) => storage.set_item(key, value),
			None => storage.remove_item(key),
		};
		if let Err(error) = result {
			leptos::logging::warn!("Couldn't update local storage key {}: {:?}", key, error);
		}
	}
	#[cfg(not(feature = "hydrate"))]
	{
		let _ = (key, value);
	}
}

/// Reads every file selected in the file input that fired `event`.
pub async fn selected_files(event: Event) -> Vec<Attachment> {
	#[cfg(feature = "hydrate")]
	{
		use leptos::prelude::event_target;
		use wasm_bindgen_futures::JsFuture;
		use web_sys::HtmlInputElement;

		let input: HtmlInputElement = event_target(&event);
		let Some(file_list) = input.files() else {
			return Vec::new();
		};
		let files: Vec<web_sys::File> = (0..file_list.length()).filter_map(|index| file_list.item(index)).collect();

		let mut attachments = Vec::with_capacity(files.len());
		for file in files {
			match JsFuture::from(file.array_buffer()).await {
				Ok(buffer) => attachments.push(Attachment {
					file_name: file.name(),
					mime_type: Some(file.type_()).filter(|mime_type| !mime_type.is_empty()),
					bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
				}),
				Err(error) => leptos::logging::warn!("Couldn't read file {}: {:?}", file.name(), error),
			}
		}
		attachments
	}
	#[cfg(not(feature = "hydrate"))]
	{
		let _ = event;
		Vec::new()
	}
}

/// Opens a PDF document held in memory in a new tab.
pub fn open_pdf(bytes: &[u8]) {
	#[cfg(feature = "hydrate")]
	{
		use leptos::prelude::window;
		use web_sys::{Blob, BlobPropertyBag, Url};

		let parts = js_sys::Array::new();
		parts.push(&js_sys::Uint8Array::from(bytes));
		let options = BlobPropertyBag::new();
		options.set_type("application/pdf");
		let url = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
			.and_then(|blob| Url::create_object_url_with_blob(&blob));
		match url {
			Ok(url) => {
				if let Err(error) = window().open_with_url_and_target(&url, "_blank") {
					leptos::logging::warn!("Couldn't open PDF: {:?}", error);
				}
			}
			Err(error) => leptos::logging::warn!("Couldn't prepare PDF: {:?}", error),
		}
	}
	#[cfg(not(feature = "hydrate"))]
	{
		let _ = bytes;
	}
}
