// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use snafu::prelude::*;

/// Describes an error occured while parsing a slug (e.g. `risk-control` or `zh`).
#[derive(Debug, Snafu, Clone, Eq, PartialEq)]
#[snafu(visibility(pub))]
pub enum ParseSlugError {
    /// The slug does not name any known variant.
    #[snafu(display("Unknown {kind} `{string}`"))]
    Unknown { kind: &'static str, string: String },
}

impl ParseSlugError {
    pub fn unknown(kind: &'static str, string: &str) -> Self {
        Self::Unknown { kind, string: string.to_string() }
    }
}

#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
pub enum ModelsError {
    #[error("Metric `{metric}` has value {value} out of range 0-100")]
    MetricOutOfRange { metric: &'static str, value: u8 },

    #[error("Arena ID `{0}` repeated in the catalog")]
    RepeatedArenaId(String),
}
