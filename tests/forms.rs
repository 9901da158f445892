// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use appeal_console::web::components::form::submit_values;
use appeal_console::web::components::status::{FALLBACK_STATUS_CLASS, status_class};
use appeal_console::web::components::{FieldDescriptor, FormValues};
use appeal_console::web::i18n::{Language, Translator};
use appeal_console::web::pages::categories::category_fields;
use appeal_console::web::pages::staff::{staff_fields, staff_payload};

#[test]
fn staff_form_blocks_until_every_field_is_filled() {
	let fields = staff_fields(Translator::new(Language::En));
	let mut submitted = Vec::new();

	let partial = FormValues::new().with_text("full_name", "Aziz Karimov").with_text("phone", " ");
	let result = submit_values(&fields, partial, |values| submitted.push(values));
	assert_eq!(result, Err(vec!["phone", "email"]));
	assert!(submitted.is_empty());

	let complete = FormValues::new()
		.with_text("full_name", "Aziz Karimov")
		.with_text("phone", "+998901112233")
		.with_text("email", "aziz@example.com");
	let result = submit_values(&fields, complete.clone(), |values| submitted.push(values));
	assert_eq!(result, Ok(()));
	assert_eq!(submitted, vec![complete]);
	assert_eq!(staff_payload(&submitted[0]).email, "aziz@example.com");
}

#[test]
fn form_labels_follow_the_language() {
	let russian = category_fields(Translator::new(Language::Ru));
	let english = category_fields(Translator::new(Language::En));
	assert_eq!(russian[0].name(), english[0].name());
	assert_ne!(russian[0].meta().label, english[0].meta().label);
	assert!(matches!(english[0], FieldDescriptor::Text(_)));
}

#[test]
fn status_badges_use_the_status_palette() {
	assert_eq!(status_class("Принято"), "bg-green-100 text-green-800");
	assert_eq!(status_class("Отказано"), "bg-red-100 text-red-800");
	assert_eq!(status_class("Closed"), FALLBACK_STATUS_CLASS);
}
