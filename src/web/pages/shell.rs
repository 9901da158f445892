// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use crate::web::settings::{ClientSettings, SETTINGS_META_NAME};
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub fn shell(options: LeptosOptions, settings: ClientSettings) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="ru">
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<meta name=SETTINGS_META_NAME content=settings.to_meta_content() />
				<HydrationScripts options />
				<MetaTags />
			</head>
			<body>
				<App />
			</body>
		</html>
	}
}
