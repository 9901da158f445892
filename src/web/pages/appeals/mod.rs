// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod answer;
mod detail;
mod list;
mod summary;

pub use answer::{AnswerAppealPage, answer_fields, answer_payload};
pub use detail::{AppealDetailPage, appeal_update, appeal_update_fields};
pub use list::{AppealsPage, appeal_columns, appeal_list_params};
