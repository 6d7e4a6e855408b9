//! Batch conversion of animation frames into matrix command strings.

use std::{io::Write, path::Path};

use image::{io::Reader, DynamicImage, ImageError};
use ledivilkku_core::{scan_image, Configuration};

/// Result of an attempt to load a single animation frame.
#[derive(Debug)]
pub struct LoadOutcome {
    /// File name as given in the configuration.
    pub name: String,
    /// Decoded image or the reason it could not be opened.
    pub image: Result<DynamicImage, ImageError>,
}

/// Load outcomes for every configured frame, in the configuration order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadReport {
    /// Returns successfully loaded images in load order.
    pub fn loaded(&self) -> impl Iterator<Item = (&str, &DynamicImage)> + '_ {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .image
                .as_ref()
                .ok()
                .map(|image| (outcome.name.as_str(), image))
        })
    }

    /// Returns the files that could not be opened in load order.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &ImageError)> + '_ {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .image
                .as_ref()
                .err()
                .map(|err| (outcome.name.as_str(), err))
        })
    }
}

/// Opens and decodes an image, detecting its format by the file content.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage, ImageError> {
    let image = Reader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Tries to load every named image from the given directory.
///
/// Failures do not stop the batch, they are recorded in the report instead.
pub fn load_images(dir: impl AsRef<Path>, names: &[String]) -> LoadReport {
    let dir = dir.as_ref();

    let outcomes = names
        .iter()
        .map(|name| {
            let image = open_image(dir.join(name));
            match &image {
                Ok(image) => log::debug!(
                    "Loaded {} ({}x{})",
                    name,
                    image.width(),
                    image.height()
                ),
                Err(err) => log::warn!("Unable to open {}: {}", name, err),
            }

            LoadOutcome {
                name: name.clone(),
                image,
            }
        })
        .collect();

    LoadReport { outcomes }
}

/// Converts every loaded image into a command string.
pub fn convert_images(
    config: &Configuration,
    report: &LoadReport,
) -> ledivilkku_core::Result<Vec<String>> {
    report
        .loaded()
        .map(|(name, image)| {
            log::trace!("Scanning {}", name);
            scan_image(config, image)
        })
        .collect()
}

/// Writes the warnings and the indexed command strings for the report.
///
/// Each converted image produces a comment line with its 1-based index among
/// the loaded images, followed by the quoted command string, so the output
/// can be pasted into the firmware sources as is.
pub fn write_report<W: Write>(
    out: &mut W,
    config: &Configuration,
    report: &LoadReport,
) -> anyhow::Result<()> {
    for (name, _) in report.failed() {
        writeln!(out, "Couldn't open {}", name)?;
    }

    let frames = convert_images(config, report)?;
    for (i, frame) in frames.iter().enumerate() {
        writeln!(out, "// {}:\n\"{}\"", i + 1, frame)?;
    }
    Ok(())
}

/// Converts the configured images from the given directory and prints the result.
pub fn run<W: Write>(
    dir: impl AsRef<Path>,
    config: &Configuration,
    out: &mut W,
) -> anyhow::Result<()> {
    let report = load_images(dir, &config.image_names);
    log::info!(
        "Loaded {} of {} images",
        report.loaded().count(),
        report.outcomes.len()
    );

    write_report(out, config, &report)
}
