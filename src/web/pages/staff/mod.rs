// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod create;
mod edit;
mod list;

use crate::model::{Staff, StaffPayload};
use crate::web::components::{FieldDescriptor, FormValues};
use crate::web::i18n::Translator;

pub use create::CreateStaffPage;
pub use edit::EditStaffPage;
pub use list::{StaffPage, staff_columns};

pub fn staff_fields(translator: Translator) -> Vec<FieldDescriptor> {
	vec![
		FieldDescriptor::text("full_name", translator.t("fields.full_name"))
			.placeholder(translator.t("placeholders.full_name"))
			.required(),
		FieldDescriptor::text("phone", translator.t("fields.phone"))
			.placeholder(translator.t("placeholders.phone"))
			.required(),
		FieldDescriptor::email("email", translator.t("fields.email"))
			.placeholder(translator.t("placeholders.email"))
			.required(),
	]
}

pub fn staff_payload(values: &FormValues) -> StaffPayload {
	StaffPayload {
		full_name: values.trimmed("full_name"),
		phone: values.trimmed("phone"),
		email: values.trimmed("email"),
	}
}

pub fn staff_defaults(staff: &Staff) -> FormValues {
	FormValues::new()
		.with_text("full_name", staff.full_name.clone())
		.with_text("phone", staff.phone.clone())
		.with_text("email", staff.email.clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::components::form::validate_required;

	#[test]
	fn every_staff_field_is_required() {
		let fields = staff_fields(Translator::default());
		let missing = validate_required(&fields, &FormValues::new());
		assert_eq!(missing, vec!["full_name", "phone", "email"]);
	}

	#[test]
	fn edit_defaults_round_into_the_payload() {
		let staff = Staff {
			id: 3,
			full_name: String::from("Sardor Aliev"),
			phone: String::from("+998935554433"),
			email: String::from("sardor@example.com"),
		};
		let payload = staff_payload(&staff_defaults(&staff));
		assert_eq!(payload.full_name, staff.full_name);
		assert_eq!(payload.phone, staff.phone);
		assert_eq!(payload.email, staff.email);
	}
}
