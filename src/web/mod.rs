// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod browser;
pub mod components;
pub mod i18n;
pub mod loadable;
pub mod pages;
pub mod query;
#[cfg(feature = "ssr")]
pub mod server;
pub mod session;
pub mod settings;
#[cfg(feature = "ssr")]
pub mod state;
pub mod toast;
