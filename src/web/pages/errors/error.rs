// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::not_found::NotFound;
use crate::api::ApiError;
use crate::web::i18n::use_i18n;
use crate::web::session::use_session;
use leptos::prelude::*;

/// Shown when a read fails. A rejected token signs the user out, which sends them to the login page.
#[component]
pub fn LoadError(error: ApiError) -> impl IntoView {
	let i18n = use_i18n();
	let session = use_session();

	if error.is_not_found() {
		return view! { <NotFound /> }.into_any();
	}
	let unauthorized = error.is_unauthorized();
	Effect::new(move |_| {
		if unauthorized {
			session.sign_out();
		}
	});

	view! {
		<div class="load_error" title=error.to_string()>
			{i18n.t("messages.error.load")}
		</div>
	}
	.into_any()
}
