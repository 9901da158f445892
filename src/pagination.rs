// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::Params;

/// Number of selectable pages for `total` rows shown `page_size` at a time. Saturates at `u32::MAX`.
pub fn page_count(total: u64, page_size: u32) -> u32 {
	if page_size == 0 {
		return 0;
	}
	u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// The page to show once the collection holds `total` rows: `page` itself, or the last page if `page` no longer
/// exists. Never below 1.
pub fn clamp_page(page: u32, total: u64, page_size: u32) -> u32 {
	page.min(page_count(total, page_size)).max(1)
}

/// Row offset of a 1-indexed page.
pub fn offset_for_page(page: u32, page_size: u32) -> u64 {
	u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Adds the `limit`/`offset` pair for `page` to a set of list parameters.
pub fn with_page(mut params: Params, page: u32, page_size: u32) -> Params {
	params.insert(String::from("limit"), page_size.to_string());
	params.insert(String::from("offset"), offset_for_page(page, page_size).to_string());
	params
}

/// The page numbers to offer around `current`, at most `window` of them.
pub fn visible_pages(current: u32, total_pages: u32, window: u32) -> Vec<u32> {
	if total_pages == 0 || window == 0 {
		return Vec::new();
	}
	let window = window.min(total_pages);
	let current = current.clamp(1, total_pages);
	let mut first = current.saturating_sub(window / 2).max(1);
	if first + window - 1 > total_pages {
		first = total_pages - window + 1;
	}
	(first..first + window).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_count_rounds_up() {
		assert_eq!(page_count(0, 10), 0);
		assert_eq!(page_count(1, 10), 1);
		assert_eq!(page_count(10, 10), 1);
		assert_eq!(page_count(11, 10), 2);
		assert_eq!(page_count(95, 30), 4);
		assert_eq!(page_count(5, 0), 0);
	}

	#[test]
	fn page_count_saturates() {
		assert_eq!(page_count(u64::MAX, 1), u32::MAX);
		assert_eq!(page_count(u64::from(u32::MAX) + 1, 1), u32::MAX);
		assert_eq!(page_count(u64::from(u32::MAX), 1), u32::MAX);
	}

	#[test]
	fn pages_past_the_end_fall_back_to_the_last_page() {
		assert_eq!(clamp_page(3, 21, 10), 3);
		assert_eq!(clamp_page(3, 20, 10), 2);
		assert_eq!(clamp_page(2, 0, 10), 1);
		assert_eq!(clamp_page(0, 50, 10), 1);
	}

	#[test]
	fn page_offsets() {
		assert_eq!(offset_for_page(1, 10), 0);
		assert_eq!(offset_for_page(3, 10), 20);
		assert_eq!(offset_for_page(0, 10), 0);
	}

	#[test]
	fn page_params_keep_filters() {
		let params = Params::from([(String::from("status"), String::from("Принято"))]);
		let params = with_page(params, 4, 10);
		assert_eq!(params["status"], "Принято");
		assert_eq!(params["limit"], "10");
		assert_eq!(params["offset"], "30");
	}

	#[test]
	fn page_window_stays_in_range() {
		assert_eq!(visible_pages(1, 3, 5), vec![1, 2, 3]);
		assert_eq!(visible_pages(1, 20, 5), vec![1, 2, 3, 4, 5]);
		assert_eq!(visible_pages(10, 20, 5), vec![8, 9, 10, 11, 12]);
		assert_eq!(visible_pages(20, 20, 5), vec![16, 17, 18, 19, 20]);
		assert!(visible_pages(1, 0, 5).is_empty());
	}
}
