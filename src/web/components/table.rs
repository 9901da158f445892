// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A paginated grid driven by column descriptors.

use super::DeleteConfirmButton;
use crate::model::Record;
use crate::pagination::{offset_for_page, page_count, visible_pages};
use crate::web::i18n::{I18n, use_i18n};
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const PAGE_WINDOW: u32 = 5;

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One column: a header and the row field it shows, optionally with its own cell rendering.
pub struct Column<T> {
	pub header: String,
	pub accessor: &'static str,
	cell: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
	fn clone(&self) -> Self {
		Self {
			header: self.header.clone(),
			accessor: self.accessor,
			cell: self.cell.clone(),
		}
	}
}

impl<T: Serialize> Column<T> {
	pub fn new(header: String, accessor: &'static str) -> Self {
		Self {
			header,
			accessor,
			cell: None,
		}
	}

	pub fn with_cell(mut self, cell: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
		self.cell = Some(Arc::new(cell));
		self
	}

	pub fn has_custom_cell(&self) -> bool {
		self.cell.is_some()
	}

	fn render(&self, row: &T) -> AnyView {
		match &self.cell {
			Some(cell) => cell(row),
			None => accessor_text(row, self.accessor).into_any(),
		}
	}
}

/// The text a default cell shows: the named field of the serialized row.
pub fn accessor_text(row: &impl Serialize, accessor: &str) -> String {
	let Ok(Value::Object(fields)) = serde_json::to_value(row) else {
		return String::new();
	};
	match fields.get(accessor) {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(value) => value.to_string(),
	}
}

/// What a row offers besides its data.
pub struct RowActions<T: 'static> {
	pub on_edit: Option<Callback<T>>,
	pub on_answer: Option<Callback<T>>,
	pub on_delete: Option<Callback<T>>,
	pub render: Option<CellRenderer<T>>,
}

impl<T: 'static> RowActions<T> {
	/// Whether the table needs an actions column at all.
	pub fn has_actions(&self) -> bool {
		self.on_edit.is_some() || self.on_answer.is_some() || self.on_delete.is_some() || self.render.is_some()
	}
}

impl<T: 'static> Clone for RowActions<T> {
	fn clone(&self) -> Self {
		Self {
			on_edit: self.on_edit,
			on_answer: self.on_answer,
			on_delete: self.on_delete,
			render: self.render.clone(),
		}
	}
}

impl<T: 'static> Default for RowActions<T> {
	fn default() -> Self {
		Self {
			on_edit: None,
			on_answer: None,
			on_delete: None,
			render: None,
		}
	}
}

#[component]
pub fn ResourceTable<T>(
	#[prop(into)] rows: Signal<Vec<T>>,
	columns: Vec<Column<T>>,
	#[prop(into)] is_loading: Signal<bool>,
	#[prop(into)] total_count: Signal<u64>,
	page_size: u32,
	#[prop(into)] current_page: Signal<u32>,
	#[prop(optional)] on_page_change: Option<Callback<u32>>,
	#[prop(optional)] actions: RowActions<T>,
) -> impl IntoView
where
	T: Clone + Record + Serialize + Send + Sync + 'static,
{
	let i18n = use_i18n();
	let show_actions = actions.has_actions();
	let column_span = (columns.len() + 1 + usize::from(show_actions)).to_string();
	let headers: Vec<String> = columns.iter().map(|column| column.header.clone()).collect();
	let columns = Arc::new(columns);
	let actions = Arc::new(actions);

	let body = move || {
		if is_loading.get() {
			return view! {
				<tr>
					<td class="table_placeholder" colspan=column_span.clone()>{i18n.t("common.loading")}</td>
				</tr>
			}
			.into_any();
		}
		let rows = rows.get();
		if rows.is_empty() {
			return view! {
				<tr>
					<td class="table_placeholder" colspan=column_span.clone()>{i18n.t("common.no_data")}</td>
				</tr>
			}
			.into_any();
		}
		let first_number = offset_for_page(current_page.get(), page_size) + 1;
		rows.into_iter()
			.enumerate()
			.map(|(index, row)| {
				let cells = columns
					.iter()
					.map(|column| view! { <td>{column.render(&row)}</td> })
					.collect_view();
				let action_cell = show_actions.then(|| {
					view! { <td class="table_actions">{action_buttons(&actions, &row, i18n)}</td> }
				});
				view! {
					<tr data-id=row.id().to_string()>
						<td class="table_row_number">{first_number + index as u64}</td>
						{cells}
						{action_cell}
					</tr>
				}
			})
			.collect_view()
			.into_any()
	};

	view! {
		<div class="resource_table">
			<table>
				<thead>
					<tr>
						<th>"#"</th>
						{headers.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}
						{show_actions.then(|| view! { <th>{i18n.t("common.actions")}</th> })}
					</tr>
				</thead>
				<tbody>{body}</tbody>
			</table>
			{on_page_change.map(|on_page_change| view! {
				<Pagination total_count page_size current_page on_page_change />
			})}
		</div>
	}
}

fn action_buttons<T>(actions: &RowActions<T>, row: &T, i18n: I18n) -> impl IntoView + use<T>
where
	T: Clone + Send + Sync + 'static,
{
	let custom = actions.render.as_ref().map(|render| render(row));
	let edit = actions.on_edit.map(|on_edit| {
		let row = row.clone();
		view! {
			<button type="button" class="action_edit" on:click=move |_| on_edit.run(row.clone())>
				{i18n.t("common.edit")}
			</button>
		}
	});
	let answer = actions.on_answer.map(|on_answer| {
		let row = row.clone();
		view! {
			<button type="button" class="action_answer" on:click=move |_| on_answer.run(row.clone())>
				{i18n.t("common.answer")}
			</button>
		}
	});
	let delete = actions.on_delete.map(|on_delete| {
		let row = row.clone();
		view! { <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| on_delete.run(row.clone())) /> }
	});

	view! {
		{custom}
		{edit}
		{answer}
		{delete}
	}
}

/// Previous/next and numbered page controls. Hidden when everything fits on one page.
#[component]
pub fn Pagination(
	#[prop(into)] total_count: Signal<u64>,
	page_size: u32,
	#[prop(into)] current_page: Signal<u32>,
	on_page_change: Callback<u32>,
) -> impl IntoView {
	let i18n = use_i18n();
	let total_pages = move || page_count(total_count.get(), page_size);

	view! {
		<Show when=move || { total_pages() > 1 }>
			<nav class="pagination">
				<button
					type="button"
					disabled=move || current_page.get() <= 1
					on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1).max(1))
				>
					{i18n.t("common.previous")}
				</button>
				{move || {
					visible_pages(current_page.get(), total_pages(), PAGE_WINDOW)
						.into_iter()
						.map(|page| {
							let class = if page == current_page.get() { "page_number current" } else { "page_number" };
							view! {
								<button type="button" class=class on:click=move |_| on_page_change.run(page)>
									{page}
								</button>
							}
						})
						.collect_view()
				}}
				<button
					type="button"
					disabled=move || current_page.get() >= total_pages()
					on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
				>
					{i18n.t("common.next")}
				</button>
			</nav>
		</Show>
	}
}
