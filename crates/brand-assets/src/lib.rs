//! Drawing primitives and generators for InkaWallet brand assets
//!
//! This crate renders the app icon, the adaptive icon foreground and the
//! splash logo into in-memory images. Writing them to disk is left to
//! [`assets::write_asset`], which the `icongen` binary drives.

pub mod assets;
pub mod canvas;
pub mod font;
pub mod generator;
pub mod style;

pub use assets::{write_asset, AssetError, AssetKind};
pub use canvas::{Canvas, PixelFormat};
pub use font::{load_font_with_fallback, FontHandle, TextBounds};
pub use generator::{create_app_icon, create_app_icon_foreground, create_splash_logo};
pub use style::{Brand, DARK_GRAY, PRIMARY_BLUE, WHITE};
