// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiError;
use crate::web::i18n::Translator;
use crate::web::session::Session;
use crate::web::toast::Toaster;
use chrono::{DateTime, NaiveDateTime};
use leptos::prelude::*;
use leptos_router::params::Params;

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Clone, Debug, Params, PartialEq)]
pub struct IdParam {
	pub id: Option<i64>,
}

/// Formats a backend timestamp for display.
pub fn format_date(value: Option<&str>) -> String {
	let Some(value) = value.filter(|value| !value.is_empty()) else {
		return String::from("N/A");
	};
	if NaiveDateTime::parse_from_str(value, DISPLAY_DATE_FORMAT).is_ok() {
		return value.to_string();
	}
	if let Ok(date) = DateTime::parse_from_rfc3339(value) {
		return date.format(DISPLAY_DATE_FORMAT).to_string();
	}
	match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
		Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
		Err(_) => String::from("Invalid Date"),
	}
}

/// The name shown for a stored file: the last segment of its path.
pub fn file_name_from_path(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or(path)
}

/// Reports a failed write: one toast, and a sign-out when the token was rejected.
pub fn report_failure(
	toaster: Toaster,
	session: &Session,
	translator: Translator,
	message_key: &str,
	item_key: &str,
	error: &ApiError,
) {
	toaster.error(translator.t_item(message_key, item_key));
	session.handle_error(error);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dates_show_day_first() {
		assert_eq!(format_date(Some("2025-03-01T10:15:00Z")), "01/03/2025 10:15");
		assert_eq!(format_date(Some("2025-03-01T10:15:00+05:00")), "01/03/2025 10:15");
		assert_eq!(format_date(Some("2025-03-01T10:15:42.123456")), "01/03/2025 10:15");
	}

	#[test]
	fn formatted_dates_pass_through() {
		assert_eq!(format_date(Some("01/03/2025 10:15")), "01/03/2025 10:15");
	}

	#[test]
	fn bad_or_missing_dates() {
		assert_eq!(format_date(Some("yesterday")), "Invalid Date");
		assert_eq!(format_date(Some("")), "N/A");
		assert_eq!(format_date(None), "N/A");
	}

	#[test]
	fn file_names_come_from_the_path() {
		assert_eq!(file_name_from_path("/media/appeals/scan.pdf"), "scan.pdf");
		assert_eq!(file_name_from_path("scan.pdf"), "scan.pdf");
		assert_eq!(file_name_from_path("https://eappeal.uz/media/a/b.png"), "b.png");
	}
}
