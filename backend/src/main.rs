// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use snafu::prelude::*;
use tokio::net::TcpListener;

use tracing_subscriber::prelude::*;

use rwai_content::ContentLibrary;
use rwai_models::Catalog;
use rwai_site::Site;

mod config;
mod errors;
mod server;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory with the synced content files. Overrides the config.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Address to listen on. Overrides the config.
    #[arg(short, long)]
    address: Option<SocketAddr>,

    /// Directory for JSON log files.
    #[arg(short, long)]
    log_path: Option<String>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = setup_logger(args.log_path.as_ref()) {
        eprintln!("Logger error: {err}");
        std::process::exit(1);
    }
    tracing::info!(
        build_date = env!("VERGEN_BUILD_TIMESTAMP"),
        commit = env!("VERGEN_GIT_SHA"),
        "Starting RWAI Arena backend!"
    );

    if let Err(err) = run(args).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), errors::BackendError> {
    let mut config = config::BackendConfig::load_or_default(args.config.as_deref());
    if let Some(content) = args.content {
        config.content_path = content;
    }
    if let Some(address) = args.address {
        config.address = address;
    }

    if !config.content_path.is_dir() {
        tracing::warn!(
            "Content directory `{}` does not exist, serving built-in texts",
            config.content_path.display()
        );
    }

    let site = Site::new(ContentLibrary::new(&config.content_path), Catalog::builtin());
    let server = server::Server::new(site);

    let address = config.address;
    let listener = TcpListener::bind(address).await.context(errors::BindSnafu { address })?;
    tracing::info!("Listening on {:?}", address);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let service = server.clone();
                let io = hyper_util::rt::TokioIo::new(stream);
                tokio::task::spawn(async move {
                    if let Err(err) = hyper::server::conn::http1::Builder::new()
                        .serve_connection(io, service)
                        .await
                    {
                        tracing::warn!("Error serving connection: {err:?}");
                    }
                });
            }
            Err(err) => tracing::warn!("Error accepting connection: {err:?}"),
        }
    }
}

fn setup_logger(log_path: Option<&String>) -> Result<(), errors::BackendError> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let output = tracing_subscriber::fmt::layer();

    if let Some(log_path) = log_path {
        let appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .filename_prefix("backend")
            .filename_suffix("log")
            .build(log_path)?;
        let file =
            tracing_subscriber::fmt::layer().with_writer(appender).json().flatten_event(true);

        tracing_subscriber::registry().with(filter).with(output).with(file).init();
    } else {
        tracing_subscriber::registry().with(filter).with(output).init();
    }
    Ok(())
}
