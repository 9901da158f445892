// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::AppealStatus;
use leptos::prelude::*;

pub const FALLBACK_STATUS_CLASS: &str = "bg-gray-100 text-gray-800";

/// Badge colours for a status label. Labels outside the known set get the neutral colours.
pub fn status_class(status: &str) -> &'static str {
	match status.parse::<AppealStatus>() {
		Ok(AppealStatus::UnderReview) => "bg-yellow-100 text-yellow-800",
		Ok(AppealStatus::Accepted) => "bg-green-100 text-green-800",
		Ok(AppealStatus::Sent) => "bg-blue-100 text-blue-800",
		Ok(AppealStatus::Rejected) => "bg-red-100 text-red-800",
		Err(_) => FALLBACK_STATUS_CLASS,
	}
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
	let class = format!("status_badge {}", status_class(&status));
	view! { <span class=class>{status}</span> }
}
