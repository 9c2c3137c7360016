// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;

use rwai_models::Locale;

use crate::{commands, errors::ConfigCheckError, utils};

/// Configuration for the `sync` command.
#[must_use]
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Content directory holding the raw files.
    pub content_path: PathBuf,
}

impl SyncConfig {
    pub fn new(args: &commands::SyncArgs) -> Self {
        Self { content_path: PathBuf::from(&args.content) }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content directory does not exist.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::dir_exists(&self.content_path)?;
        Ok(())
    }
}

/// Configuration for the `render` command.
#[must_use]
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Content directory holding the synced locale files.
    pub content_path: PathBuf,

    /// Directory the HTML files are written to.
    pub output_path: PathBuf,
}

impl RenderConfig {
    pub fn new(args: &commands::RenderArgs) -> Self {
        Self {
            content_path: PathBuf::from(&args.content),
            output_path: PathBuf::from(&args.output),
        }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content directory does not exist or the output directory can not be
    /// created.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::dir_exists(&self.content_path)?;
        utils::dir_usable(&self.output_path)?;
        Ok(())
    }
}

/// Configuration for the `section` command.
#[must_use]
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Content directory holding the synced locale files.
    pub content_path: PathBuf,

    /// English name of the homepage section.
    pub section: String,

    pub locale: Locale,
}

impl SectionConfig {
    pub fn new(args: &commands::SectionArgs) -> Self {
        let locale = match args.locale {
            commands::LocaleArg::En => Locale::En,
            commands::LocaleArg::Zh => Locale::Zh,
        };
        Self { content_path: PathBuf::from(&args.content), section: args.section.clone(), locale }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content directory does not exist.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::dir_exists(&self.content_path)?;
        Ok(())
    }
}

/// Configuration of the program.
#[derive(Debug, Clone)]
pub enum Config {
    Sync(SyncConfig),
    Render(RenderConfig),
    Section(SectionConfig),
}

impl Config {
    /// Constructs a new config from `Args::parse()`.
    #[must_use]
    pub fn new_from_args() -> Config {
        Self::new(commands::Args::parse())
    }

    /// Constructs a new config from parsed arguments.
    #[must_use]
    pub fn new(args: commands::Args) -> Config {
        use commands::Commands;

        match args.command {
            Commands::Sync(args) => Config::Sync(SyncConfig::new(&args)),
            Commands::Render(args) => Config::Render(RenderConfig::new(&args)),
            Commands::Section(args) => Config::Section(SectionConfig::new(&args)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::new(commands::Args::parse_from(args))
    }

    #[test]
    fn test_new() {
        let Config::Render(config) = parse(&["lab", "render", "--content", "c", "--output", "o"])
        else {
            panic!("Expected render config");
        };
        assert_eq!(config.content_path, PathBuf::from("c"));
        assert_eq!(config.output_path, PathBuf::from("o"));

        let Config::Section(config) = parse(&[
            "lab",
            "section",
            "--content",
            "c",
            "--section",
            "Hero Section",
            "--locale",
            "zh",
        ]) else {
            panic!("Expected section config");
        };
        assert_eq!(config.section, "Hero Section");
        assert_eq!(config.locale, Locale::Zh);

        let Config::Section(config) =
            parse(&["lab", "section", "--content", "c", "--section", "Trust Section"])
        else {
            panic!("Expected section config");
        };
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_check() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().to_string_lossy().to_string();

        let config = SyncConfig::new(&commands::SyncArgs { content: content.clone() });
        assert!(config.check().is_ok());

        let config = SyncConfig::new(&commands::SyncArgs { content: format!("{content}/missing") });
        assert!(matches!(config.check(), Err(ConfigCheckError::DoesNotExist(_))));

        let config = RenderConfig::new(&commands::RenderArgs {
            content: content.clone(),
            output: format!("{content}/site"),
        });
        assert!(config.check().is_ok());

        let config = RenderConfig::new(&commands::RenderArgs {
            content: content.clone(),
            output: format!("{content}/missing/site"),
        });
        assert!(matches!(config.check(), Err(ConfigCheckError::DoesNotExist(_))));
    }
}
