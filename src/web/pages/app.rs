// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::appeals::{AnswerAppealPage, AppealDetailPage, AppealsPage};
use super::categories::{CategoriesPage, CreateCategoryPage};
use super::header::PageHeader;
use super::login::LoginPage;
use super::responses::{CreateResponsePage, EditResponsePage, ResponsesPage};
use super::staff::{CreateStaffPage, EditStaffPage, StaffPage};
use crate::api::{Api, ApiClient, QueryCache};
use crate::web::i18n::provide_i18n;
use crate::web::query::provide_query_client;
use crate::web::session::Session;
use crate::web::settings::ClientSettings;
use crate::web::toast::{ToastStack, Toaster};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ProtectedParentRoute, Redirect, Route, Router, Routes};
use leptos_router::nested_router::Outlet;
use leptos_router::{StaticSegment, path};

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let settings = ClientSettings::current();
	provide_context(settings.clone());

	let client = ApiClient::http(&settings.api_base_url);
	provide_query_client(Api::new(client.clone(), QueryCache::new()));
	let session = Session::new(client);
	provide_context(session.clone());
	let i18n = provide_i18n();
	let toaster = Toaster::new();
	provide_context(toaster);

	Effect::new({
		let session = session.clone();
		move |_| {
			session.restore();
			i18n.restore();
		}
	});

	view! {
		<Stylesheet id="leptos" href="/pkg/appeal-console.css" />
		<Title text=move || i18n.translator().t("app.title") />

		<Router>
			<Routes fallback=|| view! { <Redirect path="/" /> }>
				<Route path=path!("/login") view=LoginPage />
				<ProtectedParentRoute
					path=StaticSegment("")
					view=Layout
					condition=move || session.authenticated()
					redirect_path=|| "/login"
				>
					<Route path=StaticSegment("") view=|| view! { <Redirect path="/appeals" /> } />
					<Route path=path!("/appeals") view=AppealsPage />
					<Route path=path!("/edit-appeal/:id") view=AppealDetailPage />
					<Route path=path!("/answer-appeal/:id") view=AnswerAppealPage />
					<Route path=path!("/appeal-categories") view=CategoriesPage />
					<Route path=path!("/create-appeal-category") view=CreateCategoryPage />
					<Route path=path!("/responses") view=ResponsesPage />
					<Route path=path!("/create-response") view=CreateResponsePage />
					<Route path=path!("/edit-response/:id") view=EditResponsePage />
					<Route path=path!("/staff") view=StaffPage />
					<Route path=path!("/create-staff") view=CreateStaffPage />
					<Route path=path!("/edit-staff/:id") view=EditStaffPage />
				</ProtectedParentRoute>
			</Routes>
		</Router>
		<ToastStack toaster />
	}
}

/// The frame around every signed-in page.
#[component]
fn Layout() -> impl IntoView {
	view! {
		<PageHeader />
		<main id="content">
			<Outlet />
		</main>
	}
}
