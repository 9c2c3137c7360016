// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bilingual content handling: splitting raw mixed-language markdown into per-locale files
//! and reading those files back.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

pub mod about;
pub mod accessor;
pub mod errors;
pub mod faq;
pub mod framework;
pub mod frontmatter;
pub mod homepage;
pub mod sections;
pub mod simple;
pub mod sync;
pub mod text;

pub use crate::{
    accessor::{ContentFile, ContentLibrary},
    errors::ContentError,
    sync::{PageKind, SyncReport, SyncedFile},
};
