// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error returned when a problem with reading or writing content files occured.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0} ({1:?})")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("Path `{0}` is not a raw content file")]
    NotRawFile(std::path::PathBuf),
}
