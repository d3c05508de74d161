use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb;

use crate::foundation::error::{ChesslineError, ChesslineResult};

/// Where a resolved font came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// The font file the caller asked for.
    Preferred(PathBuf),
    /// A system sans-serif face, identified by family name.
    System(String),
}

/// Font bytes ready for shaping and glyph rasterization.
#[derive(Clone, Debug)]
pub struct WatermarkFont {
    /// Raw font file bytes (TTF/OTF/TTC).
    pub bytes: Arc<Vec<u8>>,
    /// Face index within `bytes` (non-zero only for collections).
    pub index: u32,
    /// Origin of the bytes.
    pub source: FontSource,
}

/// Acquire a font: the preferred file first, then a system sans-serif face.
///
/// Failures are logged and never fatal; `None` means no font could be found at all.
pub fn resolve_font(preferred: Option<&Path>) -> Option<WatermarkFont> {
    if let Some(path) = preferred {
        match load_font_file(path) {
            Ok(font) => return Some(font),
            Err(e) => tracing::warn!(error = %e, "preferred font unavailable, using system font"),
        }
    }

    let font = load_system_font();
    if font.is_none() {
        tracing::warn!("no system font available");
    }
    font
}

/// Read a font file and check that it contains at least one face.
pub fn load_font_file(path: &Path) -> ChesslineResult<WatermarkFont> {
    let bytes = std::fs::read(path)
        .map_err(|e| ChesslineError::render(format!("read font '{}': {e}", path.display())))?;

    let mut db = fontdb::Database::new();
    db.load_font_data(bytes.clone());
    let index = db.faces().next().map(|f| f.index).ok_or_else(|| {
        ChesslineError::render(format!("'{}' contains no font faces", path.display()))
    })?;

    Ok(WatermarkFont {
        bytes: Arc::new(bytes),
        index,
        source: FontSource::Preferred(path.to_path_buf()),
    })
}

/// Pick a sans-serif system face, or any face when no sans-serif family is installed.
pub fn load_system_font() -> Option<WatermarkFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..Default::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))?;
    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();
    tracing::debug!(%family, "resolved system font");

    db.with_face_data(id, |data, index| WatermarkFont {
        bytes: Arc::new(data.to_vec()),
        index,
        source: FontSource::System(family),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
