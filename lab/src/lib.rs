// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod errors;
mod runners;
mod utils;

pub use crate::{
    config::{Config, RenderConfig, SectionConfig, SyncConfig},
    errors::{ConfigCheckError, ProcessingError},
    runners::{RenderRunner, SectionRunner, SyncRunner},
};
