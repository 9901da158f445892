// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiError;

/// The state of one or more reads a page is waiting on.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
	Loading,
	Ready(T),
	Failed(ApiError),
}

impl<T> Loadable<T> {
	/// Converts what a resource currently holds: nothing yet, or the outcome of its read.
	pub fn from_read(value: Option<Result<T, ApiError>>) -> Self {
		match value {
			None => Self::Loading,
			Some(Ok(value)) => Self::Ready(value),
			Some(Err(error)) => Self::Failed(error),
		}
	}

	/// Combines two reads. A failure on either side wins over loading, and the left failure wins over the right.
	pub fn join<U>(self, other: Loadable<U>) -> Loadable<(T, U)> {
		match (self, other) {
			(Self::Failed(error), _) => Loadable::Failed(error),
			(_, Loadable::Failed(error)) => Loadable::Failed(error),
			(Self::Ready(left), Loadable::Ready(right)) => Loadable::Ready((left, right)),
			_ => Loadable::Loading,
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
		match self {
			Self::Loading => Loadable::Loading,
			Self::Ready(value) => Loadable::Ready(f(value)),
			Self::Failed(error) => Loadable::Failed(error),
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	pub fn ready(self) -> Option<T> {
		match self {
			Self::Ready(value) => Some(value),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn join_waits_for_both_sides() {
		let joined = Loadable::Ready(1).join(Loadable::<&str>::Loading);
		assert!(joined.is_loading());
		let joined = Loadable::Ready(1).join(Loadable::Ready("staff"));
		assert_eq!(joined, Loadable::Ready((1, "staff")));
	}

	#[test]
	fn join_reports_the_first_failure() {
		let joined = Loadable::<i32>::Loading.join(Loadable::<i32>::Failed(ApiError::Cancelled));
		assert_eq!(joined, Loadable::Failed(ApiError::Cancelled));
		let left = ApiError::Transport(String::from("offline"));
		let joined = Loadable::<i32>::Failed(left.clone()).join(Loadable::<i32>::Failed(ApiError::Cancelled));
		assert_eq!(joined, Loadable::Failed(left));
	}

	#[test]
	fn from_read_maps_resource_states() {
		assert!(Loadable::<i32>::from_read(None).is_loading());
		assert_eq!(Loadable::from_read(Some(Ok(3))).map(|value| value * 2), Loadable::Ready(6));
	}
}
