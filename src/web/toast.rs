// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use reactive_stores::Store;
use std::time::Duration;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	fn class(&self) -> &'static str {
		match self {
			Self::Success => "toast toast_success",
			Self::Error => "toast toast_error",
		}
	}
}

#[derive(Clone, Debug, Store)]
pub struct Toast {
	id: u64,
	kind: ToastKind,
	message: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ToastList {
	#[store(key: u64 = |toast| toast.id)]
	toasts: Vec<Toast>,
	next_id: u64,
}

/// Shows short-lived notifications in the corner of the page.
#[derive(Clone, Copy)]
pub struct Toaster {
	list: Store<ToastList>,
}

impl Toaster {
	pub fn new() -> Self {
		Self {
			list: Store::new(ToastList::default()),
		}
	}

	pub fn success(&self, message: String) {
		self.push(ToastKind::Success, message);
	}

	pub fn error(&self, message: String) {
		self.push(ToastKind::Error, message);
	}

	fn push(&self, kind: ToastKind, message: String) {
		let id = self.list.next_id().get_untracked();
		self.list.next_id().set(id + 1);
		self.list.toasts().update(|toasts| toasts.push(Toast { id, kind, message }));

		let toaster = *self;
		set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
	}

	pub fn dismiss(&self, id: u64) {
		self.list.toasts().update(|toasts| toasts.retain(|toast| toast.id != id));
	}
}

impl Default for Toaster {
	fn default() -> Self {
		Self::new()
	}
}

pub fn use_toaster() -> Toaster {
	expect_context::<Toaster>()
}

#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
	view! {
		<div id="toasts">
			<For
				each=move || toaster.list.toasts()
				key=|toast| toast.read().id
				children=move |toast| {
					let id = toast.read().id;
					let kind = toast.read().kind;
					let message = toast.read().message.clone();
					view! {
						<div class=kind.class() role="status">
							<span>{message}</span>
							<button type="button" class="toast_close" on:click=move |_| toaster.dismiss(id)>
								"×"
							</button>
						</div>
					}
				}
			/>
		</div>
	}
}
