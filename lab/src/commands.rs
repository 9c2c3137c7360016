// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Parser, Subcommand, ValueEnum};

/// Arguments of the `sync` command.
#[derive(Parser, Debug)]
#[command(
    about = "Split raw content files",
    long_about = "Finds all `*.raw.md` files in the content directory and splits each of them \
                  into an English and a Chinese markdown file placed next to it."
)]
pub struct SyncArgs {
    /// Content directory.
    #[arg(long)]
    pub content: String,
}

/// Arguments of the `render` command.
#[derive(Parser, Debug)]
#[command(
    about = "Render a static site",
    long_about = "Renders the pages of both locales (including one detail page per arena) \
                  into HTML files in the output directory."
)]
pub struct RenderArgs {
    /// Content directory.
    #[arg(long)]
    pub content: String,

    /// Output directory.
    #[arg(long)]
    pub output: String,
}

/// Language of the content.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LocaleArg {
    En,
    Zh,
}

/// Arguments of the `section` command.
#[derive(Parser, Debug)]
#[command(
    about = "Print homepage section fields",
    long_about = "Prints the key-value fields of one section of the synced homepage as YAML."
)]
pub struct SectionArgs {
    /// Content directory.
    #[arg(long)]
    pub content: String,

    /// English name of the section, e.g. "Hero Section".
    #[arg(long)]
    pub section: String,

    /// Language of the homepage file.
    #[arg(long, value_enum, default_value = "en")]
    pub locale: LocaleArg,
}

/// All commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    Sync(SyncArgs),
    Render(RenderArgs),
    Section(SectionArgs),
}

/// Program arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Commands.
    #[command(subcommand)]
    pub command: Commands,
}
