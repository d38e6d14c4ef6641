mod config;

use anyhow::{Context, Result};
use brand_assets::{write_asset, AssetKind, Brand};
use config::{get_output_dir, GeneratorConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console logging on stderr so progress lines on stdout stay readable.
/// Warnings only unless RUST_LOG says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}

/// Generate and write every asset in order, reporting each one before it is
/// rendered. Stops at the first failure.
fn generate_all(
    output_dir: &Path,
    brand: &Brand,
    mut on_progress: impl FnMut(AssetKind),
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        on_progress(kind);
        let path = write_asset(output_dir, kind, brand)
            .with_context(|| format!("Failed to generate {}", kind.file_name()))?;
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<()> {
    init_logging();

    let output_dir = get_output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    info!("Output directory: {}", output_dir.display());

    let config = GeneratorConfig::load_or_default(&output_dir);
    let brand = config.brand();

    println!("Generating {} app icons...", brand.title);

    generate_all(&output_dir, &brand, |kind| {
        let (width, height) = kind.dimensions();
        println!("Creating {} ({}x{})...", kind.file_name(), width, height);
    })?;

    println!("\n✅ Icons generated successfully!");
    println!("\nNext steps:");
    println!("1. cd mobile");
    println!("2. flutter pub get");
    println!("3. flutter pub run flutter_launcher_icons");
    println!("4. flutter pub run flutter_native_splash:create");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_writes_in_order() {
        let temp_dir = std::env::temp_dir().join("icongen_test_generate_all");
        let _ = std::fs::remove_dir_all(&temp_dir);
        std::fs::create_dir_all(&temp_dir).unwrap();

        let brand = GeneratorConfig {
            bold_font: PathBuf::from("/nonexistent/Bold.ttf"),
            regular_font: PathBuf::from("/nonexistent/Regular.ttf"),
            ..GeneratorConfig::default()
        }
        .brand();

        let mut reported = Vec::new();
        let written = generate_all(&temp_dir, &brand, |kind| reported.push(kind)).unwrap();

        assert_eq!(reported, AssetKind::ALL.to_vec());
        assert_eq!(written.len(), 3);
        for (path, kind) in written.iter().zip(AssetKind::ALL) {
            assert_eq!(path.file_name().unwrap(), kind.file_name());
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }

        // Cleanup
        let _ = std::fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_generate_all_stops_on_write_failure() {
        let missing = std::env::temp_dir()
            .join("icongen_test_generate_missing")
            .join("nope");
        let _ = std::fs::remove_dir_all(&missing);

        let mut reported = Vec::new();
        let err = generate_all(&missing, &Brand::default(), |kind| reported.push(kind)).unwrap_err();

        assert_eq!(reported, vec![AssetKind::AppIcon]);
        assert!(err.to_string().contains("app_icon.png"));
    }
}
