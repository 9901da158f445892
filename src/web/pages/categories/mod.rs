// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod create;
mod list;

use crate::model::CategoryPayload;
use crate::web::components::{FieldDescriptor, FormValues};
use crate::web::i18n::Translator;

pub use create::CreateCategoryPage;
pub use list::{CategoriesPage, category_columns, category_list_params};

pub fn category_fields(translator: Translator) -> Vec<FieldDescriptor> {
	vec![
		FieldDescriptor::text("name", translator.t("fields.name"))
			.placeholder(translator.t("placeholders.name"))
			.required(),
	]
}

pub fn category_payload(values: &FormValues) -> CategoryPayload {
	CategoryPayload {
		name: values.trimmed("name"),
	}
}
