// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::i18n::use_i18n;
use leptos::prelude::*;

/// Shown in place of a record that couldn't be found.
#[component]
pub fn NotFound() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="not_found">
			<p>{i18n.t("common.not_found")}</p>
			<a href="/appeals">{i18n.t("common.back")}</a>
		</div>
	}
}
