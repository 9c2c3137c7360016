// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::unwrap_used)]

pub mod builtin;
pub mod catalog;
pub mod errors;
pub mod locale;
pub mod models;

pub use crate::{
    catalog::{ArenaQuery, Catalog, SortField, SortOrder, Stats},
    locale::{Locale, Localized},
};
