// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::auth::{Credentials, obtain_token};
use crate::web::i18n::use_i18n;
use crate::web::query::{Mutation, use_api};
use crate::web::session::use_session;
use crate::web::toast::use_toaster;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
	let i18n = use_i18n();
	let api = use_api();
	let session = use_session();
	let toaster = use_toaster();
	let navigate = use_navigate();
	let login = Mutation::new();

	let (username, set_username) = signal(String::new());
	let (password, set_password) = signal(String::new());

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		let credentials = Credentials {
			username: username.get_untracked().trim().to_string(),
			password: password.get_untracked(),
		};
		if credentials.username.is_empty() || credentials.password.is_empty() {
			return;
		}
		let client = api.client.clone();
		let session = session.clone();
		let navigate = navigate.clone();
		login.run(async move { obtain_token(&client, &credentials).await }, move |result| match result {
			Ok(tokens) => {
				session.sign_in(tokens.access);
				set_password.set(String::new());
				navigate("/appeals", Default::default());
			}
			Err(error) => {
				leptos::logging::log!("Sign-in rejected: {error}");
				toaster.error(i18n.translator_untracked().t("auth.failed"));
			}
		});
	};

	view! {
		<main id="login_page">
			<form class="login_form" on:submit=form_submit>
				<h1>{i18n.t("auth.title")}</h1>
				<label>
					<span class="form_label">{i18n.t("auth.username")}</span>
					<input type="text" name="username" autocomplete="username" required bind:value=(username, set_username) />
				</label>
				<label>
					<span class="form_label">{i18n.t("auth.password")}</span>
					<input
						type="password"
						name="password"
						autocomplete="current-password"
						required
						bind:value=(password, set_password)
					/>
				</label>
				<button type="submit" disabled=move || login.pending().get()>
					{i18n.t("auth.submit")}
				</button>
			</form>
		</main>
	}
}
