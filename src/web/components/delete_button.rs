// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::i18n::use_i18n;
use leptos::prelude::*;

/// A delete button that asks for confirmation in place before firing.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
	let i18n = use_i18n();
	let (confirming, set_confirming) = signal(false);

	view! {
		<Show
			when=move || confirming.get()
			fallback=move || view! {
				<button type="button" class="action_delete" on:click=move |_| set_confirming.set(true)>
					{i18n.t("common.delete")}
				</button>
			}
		>
			<span class="delete_confirm">
				<span class="delete_confirm_text">{i18n.t("common.confirm_delete")}</span>
				<button
					type="button"
					class="action_delete"
					on:click=move |_| {
						set_confirming.set(false);
						on_confirm.run(());
					}
				>
					"✓"
				</button>
				<button type="button" class="action_cancel" on:click=move |_| set_confirming.set(false)>
					"✗"
				</button>
			</span>
		</Show>
	}
}
