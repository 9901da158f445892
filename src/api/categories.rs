// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::cache::Namespace;
use super::resource::{Endpoints, ResourceApi};
use crate::model::AppealCategory;

pub const NAMESPACE: Namespace = "appealCategories";

pub const ENDPOINTS: Endpoints = Endpoints {
	list: "appeals/category/list",
	item: "appeals/category/{id}/",
	create: "appeals/category/create/",
	update: "appeals/category/{id}/update/",
	delete: "appeals/category/{id}/",
};

/// Categories come back as a bare array rather than a paginated envelope.
pub type CategoriesApi = ResourceApi<AppealCategory, Vec<AppealCategory>>;
