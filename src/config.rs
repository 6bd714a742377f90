use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::output::{APPICONSET_DIR, APPICON_SIZES};

/// One exported variant: file name inside the output directory and its edge length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSize {
    pub name: String,
    pub edge: u32,
}

impl IconSize {
    pub fn new(name: impl Into<String>, edge: u32) -> Self {
        IconSize {
            name: name.into(),
            edge,
        }
    }
}

/// Where the icon bundle goes and which sizes it contains
#[derive(Debug, Clone)]
pub struct IconSet {
    pub output_dir: PathBuf,
    pub sizes: Vec<IconSize>,
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet {
            output_dir: PathBuf::from(APPICONSET_DIR),
            sizes: APPICON_SIZES
                .iter()
                .map(|&(name, edge)| IconSize::new(name, edge))
                .collect(),
        }
    }
}

impl IconSet {
    pub fn new(output_dir: impl Into<PathBuf>, sizes: &[(&str, u32)]) -> Self {
        IconSet {
            output_dir: output_dir.into(),
            sizes: sizes
                .iter()
                .map(|&(name, edge)| IconSize::new(name, edge))
                .collect(),
        }
    }

    /// Validate the size table
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("icon set must contain at least one size");
        }

        let mut seen = HashSet::new();
        for size in &self.sizes {
            if size.name.is_empty() {
                bail!("icon file name cannot be empty");
            }
            // Names are joined onto output_dir, keep them inside it
            if size.name.contains('/') || size.name.contains('\\') || size.name == ".." {
                bail!("icon file name must not contain a path separator: {}", size.name);
            }
            if size.edge == 0 {
                bail!("edge length for {} must be greater than 0", size.name);
            }
            if !seen.insert(size.name.as_str()) {
                bail!("duplicate icon file name: {}", size.name);
            }
        }

        Ok(())
    }
}
