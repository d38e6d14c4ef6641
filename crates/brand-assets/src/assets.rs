use crate::generator::{create_app_icon, create_app_icon_foreground, create_splash_logo};
use crate::style::Brand;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to encode {file} as PNG: {source}")]
    Encode {
        file: &'static str,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The images the generator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    AppIcon,
    AppIconForeground,
    SplashLogo,
}

impl AssetKind {
    /// Generation order
    pub const ALL: [AssetKind; 3] = [
        AssetKind::AppIcon,
        AssetKind::AppIconForeground,
        AssetKind::SplashLogo,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKind::AppIcon => "app_icon.png",
            AssetKind::AppIconForeground => "app_icon_foreground.png",
            AssetKind::SplashLogo => "splash_logo.png",
        }
    }

    /// Size argument passed to the generator
    pub fn size(&self) -> u32 {
        match self {
            AssetKind::AppIcon | AssetKind::AppIconForeground => 1024,
            AssetKind::SplashLogo => 512,
        }
    }

    /// Pixel dimensions of the written file
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AssetKind::SplashLogo => (self.size() * 2, self.size()),
            _ => (self.size(), self.size()),
        }
    }

    pub fn render(&self, brand: &Brand) -> DynamicImage {
        match self {
            AssetKind::AppIcon => create_app_icon(self.size(), brand),
            AssetKind::AppIconForeground => create_app_icon_foreground(self.size(), brand),
            AssetKind::SplashLogo => create_splash_logo(self.size(), brand),
        }
    }
}

/// Render `kind` and write it as a PNG into `dir`
pub fn write_asset(dir: &Path, kind: AssetKind, brand: &Brand) -> Result<PathBuf, AssetError> {
    let image = kind.render(brand);

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            file: kind.file_name(),
            source,
        })?;

    let path = dir.join(kind.file_name());
    std::fs::write(&path, &png).map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {} ({} bytes)", path.display(), png.len());
    Ok(path)
}

// ============================================
// Asset Catalogue Tests
// ============================================
