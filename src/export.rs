use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::IconSet;

/// The `image` crate was built without an encoder for the requested format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingEncoder {
    pub format: ImageFormat,
}

impl fmt::Display for MissingEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {:?} encoder compiled into the image crate", self.format)
    }
}

impl std::error::Error for MissingEncoder {}

impl MissingEncoder {
    /// What to do about it, printed by the binary
    pub fn remediation(&self) -> String {
        // Cargo feature names follow the variant names: Png -> png, WebP -> webp
        let feature = format!("{:?}", self.format).to_lowercase();
        format!(
            "Enable the `{}` feature of the `image` dependency in Cargo.toml, then rebuild and rerun",
            feature
        )
    }
}

pub fn ensure_encoder(format: ImageFormat) -> Result<()> {
    if !format.writing_enabled() {
        return Err(MissingEncoder { format }.into());
    }
    Ok(())
}

/// Resample to a square of `edge` pixels. The master's own edge is an exact copy.
pub fn resize_to_edge(master: &RgbImage, edge: u32) -> RgbImage {
    if master.dimensions() == (edge, edge) {
        return master.clone();
    }
    imageops::resize(master, edge, edge, FilterType::Lanczos3)
}

fn write_image(img: &RgbImage, path: &Path, format: ImageFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    img.write_to(&mut writer, format)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Export every size of the set as PNG
pub fn export_sizes(master: &RgbImage, set: &IconSet) -> Result<Vec<PathBuf>> {
    export_sizes_as(master, set, ImageFormat::Png)
}

/// Resize the master to each entry of the set, in declared order, and write it
/// into the output directory. Existing files are overwritten. Stops at the
/// first failure; files written before it are left in place.
pub fn export_sizes_as(master: &RgbImage, set: &IconSet, format: ImageFormat) -> Result<Vec<PathBuf>> {
    set.validate()?;
    // Nothing touches the filesystem until the encoder is known to exist
    ensure_encoder(format)?;

    fs::create_dir_all(&set.output_dir).with_context(|| {
        format!("Failed to create output directory {}", set.output_dir.display())
    })?;

    let mut written = Vec::with_capacity(set.sizes.len());
    for size in &set.sizes {
        println!("   Generating {} ({}x{})...", size.name, size.edge, size.edge);

        let resized = resize_to_edge(master, size.edge);
        let path = set.output_dir.join(&size.name);
        write_image(&resized, &path, format)?;
        written.push(path);
    }

    Ok(written)
}
