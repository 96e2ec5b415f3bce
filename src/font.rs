// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Label font resolution.
//!
//! Nothing ships with the crate; label text is rendered with whatever
//! TrueType/OpenType font the host system provides. Discovery is local only.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontRef;

use crate::error::{OverlayError, Result};

/// Environment variable that overrides font discovery with an explicit path.
pub const FONT_ENV: &str = "VISION_OVERLAY_FONT";

/// Subdirectory of the user config directory searched for fonts.
const CONFIG_DIR_NAME: &str = "vision-overlay";

/// Well-known system font locations, checked last.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Locate a usable label font on this machine.
///
/// Checks the [`FONT_ENV`] override first, then `.ttf`/`.otf` files under the
/// user config directory, then a short list of system font paths.
#[must_use]
pub fn find_font() -> Option<PathBuf> {
    if let Some(path) = env::var_os(FONT_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!(?path, "using label font from environment override");
            return Some(path);
        }
        tracing::warn!(?path, "font override does not exist, falling back to discovery");
    }

    if let Some(path) = config_dir_font() {
        tracing::debug!(?path, "using label font from config directory");
        return Some(path);
    }

    SYSTEM_FONTS.iter().map(PathBuf::from).find(|p| p.exists())
}

/// First font file under `<config_dir>/vision-overlay/`, in path order.
fn config_dir_font() -> Option<PathBuf> {
    let font_dir = dirs::config_dir()?.join(CONFIG_DIR_NAME);
    let mut candidates: Vec<PathBuf> = fs::read_dir(font_dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_lowercase());
            matches!(ext.as_deref(), Some("ttf" | "otf"))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

/// Read font bytes from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_font_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Resolve and read the default label font.
///
/// # Errors
///
/// Returns an error if no font is found or the resolved file cannot be read.
pub fn default_font_bytes() -> Result<Vec<u8>> {
    let path = find_font().ok_or_else(|| {
        OverlayError::FontError(format!(
            "no usable label font found; set {FONT_ENV} to a .ttf path"
        ))
    })?;
    load_font_bytes(path)
}

/// Parse font bytes into a [`FontRef`] borrowing the input.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid font.
pub fn font_from_bytes(data: &[u8]) -> Result<FontRef<'_>> {
    FontRef::try_from_slice(data).map_err(|err| OverlayError::FontError(err.to_string()))
}
