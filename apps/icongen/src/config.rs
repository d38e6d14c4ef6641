use anyhow::Result;
use brand_assets::Brand;
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Optional override file, looked up inside the output directory
pub const CONFIG_FILE_NAME: &str = "icongen.json";

/// Brand settings; every field falls back to the InkaWallet defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub initials: String,
    pub title: String,
    pub subtitle: String,
    /// RGB triples
    pub primary_color: [u8; 3],
    pub on_primary_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
    pub bold_font: PathBuf,
    pub regular_font: PathBuf,
    pub icon_text_lift: i32,
    pub title_gap: i32,
    /// Apply the rounded-corner mask to app_icon.png (adds an alpha channel)
    pub round_icon_corners: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from(&Brand::default())
    }
}

impl From<&Brand> for GeneratorConfig {
    fn from(brand: &Brand) -> Self {
        Self {
            initials: brand.initials.clone(),
            title: brand.title.clone(),
            subtitle: brand.subtitle.clone(),
            primary_color: brand.primary.0,
            on_primary_color: brand.on_primary.0,
            secondary_text_color: brand.secondary_text.0,
            bold_font: brand.bold_font.clone(),
            regular_font: brand.regular_font.clone(),
            icon_text_lift: brand.icon_text_lift,
            title_gap: brand.title_gap,
            round_icon_corners: brand.round_icon_corners,
        }
    }
}

/// Directory the assets are written to: `assets/images` inside this crate.
///
/// The path is fixed at compile time from `CARGO_MANIFEST_DIR`, so it points
/// into the source tree of the machine that built the binary. Run the tool
/// with `cargo run -p icongen` from a checkout; a binary copied elsewhere
/// still writes to the build machine's path (and fails if it does not exist
/// and cannot be created).
pub fn get_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("images")
}

pub fn get_config_path(output_dir: &Path) -> PathBuf {
    output_dir.join(CONFIG_FILE_NAME)
}

impl GeneratorConfig {
    /// Try to load config from `output_dir`. `Ok(None)` when there is no
    /// config file.
    pub fn load(output_dir: &Path) -> Result<Option<Self>> {
        let config_path = get_config_path(output_dir);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: GeneratorConfig = serde_json::from_str(&content)?;
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    /// Load config, or use defaults when the file is missing or malformed
    pub fn load_or_default(output_dir: &Path) -> Self {
        let config_path = get_config_path(output_dir);

        match Self::load(output_dir) {
            Ok(Some(config)) => {
                info!("Config loaded from {}", config_path.display());
                config
            }
            Ok(None) => {
                info!("No {} found, using default brand", CONFIG_FILE_NAME);
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn brand(&self) -> Brand {
        Brand {
            initials: self.initials.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            primary: Rgb(self.primary_color),
            on_primary: Rgb(self.on_primary_color),
            secondary_text: Rgb(self.secondary_text_color),
            bold_font: self.bold_font.clone(),
            regular_font: self.regular_font.clone(),
            icon_text_lift: self.icon_text_lift,
            title_gap: self.title_gap,
            round_icon_corners: self.round_icon_corners,
        }
    }
}

// ============================================
// Config Tests
// ============================================
