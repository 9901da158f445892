// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::cache::Namespace;
use super::resource::{Endpoints, ResourceApi};
use crate::model::Staff;

pub const NAMESPACE: Namespace = "staff";

pub const ENDPOINTS: Endpoints = Endpoints {
	list: "staff/list",
	item: "staff/{id}",
	create: "staff/create/",
	update: "staff/{id}/update/",
	delete: "staff/{id}/delete/",
};

pub type StaffApi = ResourceApi<Staff>;
