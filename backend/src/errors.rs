// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BackendError {
    #[snafu(context(false), display("Building response: {source}"))]
    Http { source: http::Error },

    #[snafu(display("Binding to {address}: {source}"))]
    Bind { source: std::io::Error, address: std::net::SocketAddr },

    #[snafu(context(false), display("Initializing log file appender: {source}"))]
    LogFile { source: tracing_appender::rolling::InitError },
}
