// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod app;
pub mod appeals;
pub mod categories;
mod errors;
mod header;
mod login;
pub mod responses;
#[cfg(feature = "ssr")]
pub mod shell;
pub mod staff;
pub mod utils;
