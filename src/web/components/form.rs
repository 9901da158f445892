// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A data-entry form driven by field descriptors.

use crate::api::Attachment;
use crate::web::browser;
use crate::web::i18n::{I18n, use_i18n};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
}

impl SelectOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// What every field kind shares.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldMeta {
	pub name: &'static str,
	pub label: String,
	pub placeholder: Option<String>,
	pub required: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldDescriptor {
	Text(FieldMeta),
	Email(FieldMeta),
	Textarea(FieldMeta),
	Select { meta: FieldMeta, options: Vec<SelectOption> },
	MultipleFiles(FieldMeta),
}

fn meta(name: &'static str, label: String) -> FieldMeta {
	FieldMeta {
		name,
		label,
		placeholder: None,
		required: false,
	}
}

impl FieldDescriptor {
	pub fn text(name: &'static str, label: String) -> Self {
		Self::Text(meta(name, label))
	}

	pub fn email(name: &'static str, label: String) -> Self {
		Self::Email(meta(name, label))
	}

	pub fn textarea(name: &'static str, label: String) -> Self {
		Self::Textarea(meta(name, label))
	}

	pub fn select(name: &'static str, label: String, options: Vec<SelectOption>) -> Self {
		Self::Select {
			meta: meta(name, label),
			options,
		}
	}

	pub fn files(name: &'static str, label: String) -> Self {
		Self::MultipleFiles(meta(name, label))
	}

	pub fn required(mut self) -> Self {
		self.meta_mut().required = true;
		self
	}

	pub fn placeholder(mut self, placeholder: String) -> Self {
		self.meta_mut().placeholder = Some(placeholder);
		self
	}

	pub fn meta(&self) -> &FieldMeta {
		match self {
			Self::Text(meta) | Self::Email(meta) | Self::Textarea(meta) | Self::MultipleFiles(meta) => meta,
			Self::Select { meta, .. } => meta,
		}
	}

	fn meta_mut(&mut self) -> &mut FieldMeta {
		match self {
			Self::Text(meta) | Self::Email(meta) | Self::Textarea(meta) | Self::MultipleFiles(meta) => meta,
			Self::Select { meta, .. } => meta,
		}
	}

	pub fn name(&self) -> &'static str {
		self.meta().name
	}

	pub fn is_required(&self) -> bool {
		self.meta().required
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
	Text(String),
	Files(Vec<Attachment>),
}

impl FieldValue {
	/// Blank text counts as empty, as does an empty file selection.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text(text) => text.trim().is_empty(),
			Self::Files(files) => files.is_empty(),
		}
	}
}

/// Form contents keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
		self.set_text(name, value.into());
		self
	}

	pub fn set_text(&mut self, name: &str, value: String) {
		self.0.insert(name.to_string(), FieldValue::Text(value));
	}

	pub fn set_files(&mut self, name: &str, files: Vec<Attachment>) {
		self.0.insert(name.to_string(), FieldValue::Files(files));
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.0.get(name)
	}

	/// The text of a field; empty when it's unset or holds files.
	pub fn text(&self, name: &str) -> &str {
		match self.0.get(name) {
			Some(FieldValue::Text(text)) => text,
			_ => "",
		}
	}

	pub fn trimmed(&self, name: &str) -> String {
		self.text(name).trim().to_string()
	}

	pub fn files(&self, name: &str) -> &[Attachment] {
		match self.0.get(name) {
			Some(FieldValue::Files(files)) => files,
			_ => &[],
		}
	}

	pub fn take_files(&mut self, name: &str) -> Vec<Attachment> {
		match self.0.remove(name) {
			Some(FieldValue::Files(files)) => files,
			_ => Vec::new(),
		}
	}

	pub fn id(&self, name: &str) -> Option<i64> {
		self.text(name).trim().parse().ok()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Names of the required fields that have no value.
pub fn validate_required(fields: &[FieldDescriptor], values: &FormValues) -> Vec<&'static str> {
	fields
		.iter()
		.filter(|field| field.is_required())
		.filter(|field| values.get(field.name()).is_none_or(FieldValue::is_empty))
		.map(FieldDescriptor::name)
		.collect()
}

/// Checks the values and passes them to `on_submit`, or returns the invalid field names without calling it.
pub fn submit_values(
	fields: &[FieldDescriptor],
	values: FormValues,
	on_submit: impl FnOnce(FormValues),
) -> Result<(), Vec<&'static str>> {
	let missing = validate_required(fields, &values);
	if !missing.is_empty() {
		return Err(missing);
	}
	on_submit(values);
	Ok(())
}

#[component]
pub fn ResourceForm(
	#[prop(into)] fields: Signal<Vec<FieldDescriptor>>,
	on_submit: Callback<FormValues>,
	#[prop(optional)] default_values: Option<FormValues>,
	#[prop(into, default = false.into())] is_submitting: Signal<bool>,
	#[prop(optional)] submit_key: Option<&'static str>,
) -> impl IntoView {
	let i18n = use_i18n();
	let values = RwSignal::new(default_values.unwrap_or_default());
	let invalid: RwSignal<Vec<&'static str>> = RwSignal::new(Vec::new());
	let submitting = move || is_submitting.get();
	let submit_key = submit_key.unwrap_or("common.save");

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		if is_submitting.get_untracked() {
			return;
		}
		let result = fields.with_untracked(|fields| {
			submit_values(fields, values.get_untracked(), |values| on_submit.run(values))
		});
		match result {
			Ok(()) => invalid.set(Vec::new()),
			Err(missing) => invalid.set(missing),
		}
	};

	view! {
		<form class="resource_form" on:submit=form_submit>
			{move || {
				fields
					.get()
					.into_iter()
					.map(|field| render_field(field, values, invalid, i18n))
					.collect_view()
			}}
			<div class="form_actions">
				<button type="submit" disabled=submitting>
					{move || {
						if submitting() {
							i18n.translator().t("common.submitting")
						} else {
							i18n.translator().t(submit_key)
						}
					}}
				</button>
			</div>
		</form>
	}
}

fn render_field(
	field: FieldDescriptor,
	values: RwSignal<FormValues>,
	invalid: RwSignal<Vec<&'static str>>,
	i18n: I18n,
) -> impl IntoView {
	let FieldMeta {
		name,
		label,
		placeholder,
		required,
	} = field.meta().clone();
	let text_value = move || values.with(|values| values.text(name).to_string());

	let control = match field {
		FieldDescriptor::Text(_) | FieldDescriptor::Email(_) => {
			let input_type = if matches!(field, FieldDescriptor::Email(_)) { "email" } else { "text" };
			view! {
				<input
					type=input_type
					name=name
					placeholder=placeholder
					prop:value=text_value
					on:input=move |event| values.update(|values| values.set_text(name, event_target_value(&event)))
				/>
			}
			.into_any()
		}
		FieldDescriptor::Textarea(_) => view! {
			<textarea
				name=name
				placeholder=placeholder
				prop:value=text_value
				on:input=move |event| values.update(|values| values.set_text(name, event_target_value(&event)))
			></textarea>
		}
		.into_any(),
		FieldDescriptor::Select { options, .. } => {
			let prompt = placeholder.unwrap_or_else(|| i18n.translator_untracked().t("placeholders.select"));
			view! {
				<select
					name=name
					on:change=move |event| values.update(|values| values.set_text(name, event_target_value(&event)))
				>
					<option value="">{prompt}</option>
					{options
						.into_iter()
						.map(|option| {
							let value = option.value.clone();
							view! {
								<option
									value=option.value
									selected=move || values.with(|values| values.text(name) == value)
								>
									{option.label}
								</option>
							}
						})
						.collect_view()}
				</select>
			}
			.into_any()
		}
		FieldDescriptor::MultipleFiles(_) => view! {
			<input
				type="file"
				multiple=true
				name=name
				on:change=move |event| {
					spawn_local(async move {
						let files = browser::selected_files(event).await;
						values.update(|values| values.set_files(name, files));
					});
				}
			/>
			<ul class="selected_files">
				{move || {
					values.with(|values| {
						values
							.files(name)
							.iter()
							.map(|file| view! { <li>{file.file_name.clone()}</li> })
							.collect_view()
					})
				}}
			</ul>
		}
		.into_any(),
	};

	let field_class = move || {
		if invalid.with(|invalid| invalid.contains(&name)) {
			"form_field form_field_invalid"
		} else {
			"form_field"
		}
	};

	view! {
		<div class=field_class>
			<label>
				<span class="form_label">{label}{required.then_some(" *")}</span>
				{control}
			</label>
			<Show when=move || invalid.with(|invalid| invalid.contains(&name))>
				<span class="form_error">{i18n.t("common.required")}</span>
			</Show>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	fn staff_fields() -> Vec<FieldDescriptor> {
		vec![
			FieldDescriptor::text("full_name", String::from("Full name")).required(),
			FieldDescriptor::text("phone", String::from("Phone")).required(),
			FieldDescriptor::email("email", String::from("Email")),
		]
	}

	#[test]
	fn blank_required_fields_block_submission() {
		let calls = Cell::new(0);
		let values = FormValues::new().with_text("full_name", "   ").with_text("email", "a@b.uz");
		let result = submit_values(&staff_fields(), values, |_| calls.set(calls.get() + 1));
		assert_eq!(result, Err(vec!["full_name", "phone"]));
		assert_eq!(calls.get(), 0);
	}

	#[test]
	fn complete_form_submits_once_with_every_value() {
		let submitted = Cell::new(None);
		let calls = Cell::new(0);
		let values = FormValues::new()
			.with_text("full_name", "Aziza Rahimova")
			.with_text("phone", "+998901234567");
		let result = submit_values(&staff_fields(), values.clone(), |values| {
			calls.set(calls.get() + 1);
			submitted.set(Some(values));
		});
		assert_eq!(result, Ok(()));
		assert_eq!(calls.get(), 1);
		assert_eq!(submitted.take(), Some(values));
	}

	#[test]
	fn required_selects_and_files_need_a_value() {
		let fields = vec![
			FieldDescriptor::select(
				"status",
				String::from("Status"),
				vec![SelectOption::new("Принято", "Принято")],
			)
			.required(),
			FieldDescriptor::files("files", String::from("Files")).required(),
		];
		let mut values = FormValues::new().with_text("status", "");
		values.set_files("files", Vec::new());
		assert_eq!(validate_required(&fields, &values), vec!["status", "files"]);

		let mut values = FormValues::new().with_text("status", "Принято");
		values.set_files(
			"files",
			vec![Attachment {
				file_name: String::from("scan.pdf"),
				mime_type: Some(String::from("application/pdf")),
				bytes: vec![1, 2, 3],
			}],
		);
		assert!(validate_required(&fields, &values).is_empty());
		assert_eq!(values.files("files").len(), 1);
		assert_eq!(values.take_files("files").len(), 1);
		assert!(values.files("files").is_empty());
	}

	#[test]
	fn descriptors_carry_their_settings() {
		let field = FieldDescriptor::textarea("text", String::from("Text"))
			.placeholder(String::from("Enter text"))
			.required();
		assert_eq!(field.name(), "text");
		assert!(field.is_required());
		assert_eq!(field.meta().placeholder.as_deref(), Some("Enter text"));
		assert!(!FieldDescriptor::email("email", String::from("Email")).is_required());
	}

	#[test]
	fn ids_parse_from_text() {
		let values = FormValues::new().with_text("answerer", " 12 ").with_text("appeal", "abc");
		assert_eq!(values.id("answerer"), Some(12));
		assert_eq!(values.id("appeal"), None);
		assert_eq!(values.id("missing"), None);
	}
}
