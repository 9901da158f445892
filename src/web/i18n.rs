// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interface translations. Russian is the default language.

use super::browser;
use leptos::prelude::*;

const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
	#[default]
	Ru,
	En,
}

impl Language {
	pub const ALL: [Language; 2] = [Self::Ru, Self::En];

	pub fn code(&self) -> &'static str {
		match self {
			Self::Ru => "ru",
			Self::En => "en",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|language| language.code() == code)
	}
}

/// Looks up messages for one language. Cheap to copy; column and field descriptors take one of these.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Translator {
	pub language: Language,
}

impl Translator {
	pub fn new(language: Language) -> Self {
		Self { language }
	}

	/// The message for `key`, or the key itself when no table has it.
	pub fn t(&self, key: &str) -> String {
		lookup(self.language, key)
			.or_else(|| lookup(Language::default(), key))
			.map(String::from)
			.unwrap_or_else(|| key.to_string())
	}

	/// A message with its `{item}` placeholder replaced by the translation of `item_key`.
	pub fn t_item(&self, key: &str, item_key: &str) -> String {
		interpolate(&self.t(key), &self.t(item_key))
	}
}

pub fn interpolate(template: &str, item: &str) -> String {
	template.replace("{item}", item)
}

/// The reactive language choice, provided through context.
#[derive(Clone, Copy)]
pub struct I18n {
	language: RwSignal<Language>,
}

impl I18n {
	pub fn new() -> Self {
		Self {
			language: RwSignal::new(Language::default()),
		}
	}

	/// Picks up a language saved by an earlier visit.
	pub fn restore(&self) {
		if let Some(language) = browser::load_item(LANGUAGE_STORAGE_KEY).and_then(|code| Language::from_code(&code)) {
			self.language.set(language);
		}
	}

	pub fn language(&self) -> Language {
		self.language.get()
	}

	pub fn set_language(&self, language: Language) {
		browser::store_item(LANGUAGE_STORAGE_KEY, Some(language.code()));
		self.language.set(language);
	}

	/// A translator for the current language. Reading it subscribes to language changes.
	pub fn translator(&self) -> Translator {
		Translator::new(self.language.get())
	}

	pub fn translator_untracked(&self) -> Translator {
		Translator::new(self.language.get_untracked())
	}

	pub fn t(self, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
		let language = self.language;
		move || Translator::new(language.get()).t(key)
	}
}

impl Default for I18n {
	fn default() -> Self {
		Self::new()
	}
}

pub fn provide_i18n() -> I18n {
	let i18n = I18n::new();
	provide_context(i18n);
	i18n
}

pub fn use_i18n() -> I18n {
	use_context::<I18n>().unwrap_or_default()
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
	let table = match language {
		Language::Ru => RU,
		Language::En => EN,
	};
	table.iter().find(|(entry, _)| *entry == key).map(|(_, message)| *message)
}

const RU: &[(&str, &str)] = &[
	("app.title", "Обращения граждан"),
	("navigation.appeals", "Обращения"),
	("navigation.appeal_categories", "Категории обращений"),
	("navigation.responses", "Ответы"),
	("navigation.staff", "Сотрудники"),
	("navigation.logout", "Выйти"),
	("navigation.language", "Язык"),
	("auth.title", "Вход в систему"),
	("auth.username", "Имя пользователя"),
	("auth.password", "Пароль"),
	("auth.submit", "Войти"),
	("auth.failed", "Неверное имя пользователя или пароль"),
	("items.appeal", "обращение"),
	("items.category", "категория"),
	("items.response", "ответ"),
	("items.staff", "сотрудник"),
	("fields.reference_number", "Номер обращения"),
	("fields.category", "Категория"),
	("fields.region", "Регион"),
	("fields.status", "Статус"),
	("fields.created_at", "Дата создания"),
	("fields.sender_quantity", "Количество заявителей"),
	("fields.text", "Текст"),
	("fields.files", "Файлы"),
	("fields.answerer", "Ответственный"),
	("fields.appeal", "Обращение"),
	("fields.name", "Название"),
	("fields.full_name", "ФИО"),
	("fields.phone", "Телефон"),
	("fields.email", "Электронная почта"),
	("fields.address", "Адрес"),
	("fields.sender", "Заявитель"),
	("placeholders.search_reference", "Поиск по номеру обращения"),
	("placeholders.search_name", "Поиск по названию"),
	("placeholders.text", "Введите текст"),
	("placeholders.name", "Введите название"),
	("placeholders.full_name", "Введите ФИО"),
	("placeholders.phone", "+998 90 123 45 67"),
	("placeholders.email", "name@example.com"),
	("placeholders.region", "Введите регион"),
	("placeholders.select", "Выберите..."),
	("filters.all_statuses", "Все статусы"),
	("dashboard.total", "Всего обращений"),
	("pages.appeals", "Обращения"),
	("pages.appeal_details", "Детали обращения"),
	("pages.answer_appeal", "Ответить на обращение"),
	("pages.categories", "Категории обращений"),
	("pages.create_category", "Новая категория"),
	("pages.edit_category", "Изменить категорию"),
	("pages.responses", "Ответы"),
	("pages.create_response", "Новый ответ"),
	("pages.edit_response", "Изменить ответ"),
	("pages.staff", "Сотрудники"),
	("pages.create_staff", "Новый сотрудник"),
	("pages.edit_staff", "Изменить сотрудника"),
	("pages.update_appeal", "Изменить обращение"),
	("common.loading", "Загрузка..."),
	("common.no_data", "Нет данных"),
	("common.actions", "Действия"),
	("common.view", "Просмотр"),
	("common.answer", "Ответить"),
	("common.edit", "Изменить"),
	("common.delete", "Удалить"),
	("common.confirm_delete", "Удалить?"),
	("common.cancel", "Отмена"),
	("common.save", "Сохранить"),
	("common.submitting", "Сохранение..."),
	("common.back", "Назад"),
	("common.add", "Добавить"),
	("common.previous", "Назад"),
	("common.next", "Вперёд"),
	("common.download_pdf", "Скачать PDF"),
	("common.download", "Скачать"),
	("common.file", "Файл"),
	("common.not_found", "Запись не найдена"),
	("common.not_available", "Н/Д"),
	("common.required", "Обязательное поле"),
	("common.existing_response", "Ответ на обращение"),
	("common.no_response", "Ответа пока нет"),
	("common.page_not_found", "Страница не найдена"),
	("messages.success.created", "Успешно создано: {item}"),
	("messages.success.updated", "Успешно обновлено: {item}"),
	("messages.success.deleted", "Успешно удалено: {item}"),
	("messages.error.create", "Ошибка при создании: {item}"),
	("messages.error.update", "Ошибка при обновлении: {item}"),
	("messages.error.delete", "Ошибка при удалении: {item}"),
	("messages.error.load", "Не удалось загрузить данные"),
	("messages.error.pdf", "Не удалось получить PDF"),
];

const EN: &[(&str, &str)] = &[
	("app.title", "Citizen Appeals"),
	("navigation.appeals", "Appeals"),
	("navigation.appeal_categories", "Appeal Categories"),
	("navigation.responses", "Responses"),
	("navigation.staff", "Staff"),
	("navigation.logout", "Log out"),
	("navigation.language", "Language"),
	("auth.title", "Sign in"),
	("auth.username", "Username"),
	("auth.password", "Password"),
	("auth.submit", "Sign in"),
	("auth.failed", "Wrong username or password"),
	("items.appeal", "appeal"),
	("items.category", "category"),
	("items.response", "response"),
	("items.staff", "staff member"),
	("fields.reference_number", "Reference number"),
	("fields.category", "Category"),
	("fields.region", "Region"),
	("fields.status", "Status"),
	("fields.created_at", "Created at"),
	("fields.sender_quantity", "Senders"),
	("fields.text", "Text"),
	("fields.files", "Files"),
	("fields.answerer", "Answerer"),
	("fields.appeal", "Appeal"),
	("fields.name", "Name"),
	("fields.full_name", "Full name"),
	("fields.phone", "Phone"),
	("fields.email", "Email"),
	("fields.address", "Address"),
	("fields.sender", "Sender"),
	("placeholders.search_reference", "Search by reference number"),
	("placeholders.search_name", "Search by name"),
	("placeholders.text", "Enter text"),
	("placeholders.name", "Enter a name"),
	("placeholders.full_name", "Enter the full name"),
	("placeholders.phone", "+998 90 123 45 67"),
	("placeholders.email", "name@example.com"),
	("placeholders.region", "Enter the region"),
	("placeholders.select", "Select..."),
	("filters.all_statuses", "All statuses"),
	("dashboard.total", "Total appeals"),
	("pages.appeals", "Appeals"),
	("pages.appeal_details", "Appeal details"),
	("pages.answer_appeal", "Answer appeal"),
	("pages.categories", "Appeal categories"),
	("pages.create_category", "New category"),
	("pages.edit_category", "Edit category"),
	("pages.responses", "Responses"),
	("pages.create_response", "New response"),
	("pages.edit_response", "Edit response"),
	("pages.staff", "Staff"),
	("pages.create_staff", "New staff member"),
	("pages.edit_staff", "Edit staff member"),
	("pages.update_appeal", "Update appeal"),
	("common.loading", "Loading..."),
	("common.no_data", "No data"),
	("common.actions", "Actions"),
	("common.view", "View"),
	("common.answer", "Answer"),
	("common.edit", "Edit"),
	("common.delete", "Delete"),
	("common.confirm_delete", "Delete?"),
	("common.cancel", "Cancel"),
	("common.save", "Save"),
	("common.submitting", "Saving..."),
	("common.back", "Back"),
	("common.add", "Add"),
	("common.previous", "Previous"),
	("common.next", "Next"),
	("common.download_pdf", "Download PDF"),
	("common.download", "Download"),
	("common.file", "File"),
	("common.not_found", "Record not found"),
	("common.not_available", "N/A"),
	("common.required", "This field is required"),
	("common.existing_response", "Response"),
	("common.no_response", "No response yet"),
	("common.page_not_found", "Page not found"),
	("messages.success.created", "Successfully created {item}"),
	("messages.success.updated", "Successfully updated {item}"),
	("messages.success.deleted", "Successfully deleted {item}"),
	("messages.error.create", "Failed to create {item}"),
	("messages.error.update", "Failed to update {item}"),
	("messages.error.delete", "Failed to delete {item}"),
	("messages.error.load", "Failed to load data"),
	("messages.error.pdf", "Failed to get the PDF"),
];
