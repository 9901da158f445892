// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::i18n::{Language, use_i18n};
use crate::web::session::use_session;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

const NAVIGATION: [(&str, &str); 4] = [
	("/appeals", "navigation.appeals"),
	("/appeal-categories", "navigation.appeal_categories"),
	("/responses", "navigation.responses"),
	("/staff", "navigation.staff"),
];

/// The navigation frame around every signed-in page.
#[component]
pub fn PageHeader() -> impl IntoView {
	let i18n = use_i18n();
	let session = use_session();
	let pathname = use_location().pathname;
	let navigate = use_navigate();

	let logout = move |_| {
		session.sign_out();
		navigate("/login", Default::default());
	};

	view! {
		<header id="header">
			<h1 id="header_title">{i18n.t("app.title")}</h1>
			<nav id="header_navigation">
				{NAVIGATION
					.into_iter()
					.map(|(href, key)| {
						let class = move || {
							if pathname.with(|path| path.starts_with(href)) {
								"navigation_link active"
							} else {
								"navigation_link"
							}
						};
						view! {
							<a href=href class=class>
								{i18n.t(key)}
							</a>
						}
					})
					.collect_view()}
			</nav>
			<div id="header_controls">
				<select
					id="language_switch"
					aria-label=move || i18n.translator().t("navigation.language")
					on:change=move |event| {
						if let Some(language) = Language::from_code(&event_target_value(&event)) {
							i18n.set_language(language);
						}
					}
				>
					{Language::ALL
						.into_iter()
						.map(|language| {
							view! {
								<option value=language.code() selected=move || i18n.language() == language>
									{language.code().to_uppercase()}
								</option>
							}
						})
						.collect_view()}
				</select>
				<button type="button" id="logout" on:click=logout>
					{i18n.t("navigation.logout")}
				</button>
			</div>
		</header>
	}
}
