// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod delete_button;
pub mod form;
pub mod status;
pub mod table;

pub use delete_button::DeleteConfirmButton;
pub use form::{FieldDescriptor, FieldValue, FormValues, ResourceForm, SelectOption};
pub use status::StatusBadge;
pub use table::{Column, Pagination, ResourceTable, RowActions};
