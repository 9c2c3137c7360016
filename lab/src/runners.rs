// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rwai_content::{ContentLibrary, accessor, sync};
use rwai_models::Catalog;
use rwai_site::{Rendered, Site, layout};

use crate::{config, errors::ProcessingError, utils};

/// Splits all raw files of the content directory into locale files.
pub struct SyncRunner;

impl SyncRunner {
    pub fn run(config: &config::SyncConfig) -> Result<(), ProcessingError> {
        let report = sync::sync_all(&config.content_path)?;
        for file in &report.files {
            log::info!(" - {} ({:?})", file.raw.display(), file.kind);
        }
        log::info!(
            "Synced {} raw files ({} copied verbatim)",
            report.processed(),
            report.verbatim()
        );
        Ok(())
    }
}

/// Renders all static routes of the site into HTML files.
pub struct RenderRunner;

impl RenderRunner {
    pub fn run(config: &config::RenderConfig) -> Result<(), ProcessingError> {
        let site = Site::new(ContentLibrary::new(&config.content_path), Catalog::builtin());

        let routes = site.static_routes();
        for route in &routes {
            let html = match site.render(route) {
                Rendered::Page(html) | Rendered::NotFound(html) => html,
                Rendered::Redirect(location) => layout::redirect(&location),
            };
            let path = config.output_path.join(route.file_path());
            log::debug!("Writing `{}`", path.display());
            utils::write_file(&path, &html)?;
        }

        log::info!("Rendered {} pages into `{}`", routes.len(), config.output_path.display());
        Ok(())
    }
}

/// Prints the fields of one homepage section.
pub struct SectionRunner;

impl SectionRunner {
    /// Reads the fields of the section.
    pub fn fields(config: &config::SectionConfig) -> Result<accessor::Fields, ProcessingError> {
        let library = ContentLibrary::new(&config.content_path);
        let section = library.homepage_section(&config.section, config.locale).ok_or_else(|| {
            ProcessingError::SectionNotFound {
                section: config.section.clone(),
                locale: config.locale,
            }
        })?;
        Ok(accessor::parse_section_fields(&section.content))
    }

    pub fn run(config: &config::SectionConfig) -> Result<(), ProcessingError> {
        let fields = Self::fields(config)?;
        log::info!("Found {} fields", fields.len());
        print!("{}", serde_yaml::to_string(&fields)?);
        Ok(())
    }
}
