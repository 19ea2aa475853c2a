use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use ttf_parser::{Face, name_id};

use crate::config::FontConfig;

/// Family used when no TrueType font is available
pub const FALLBACK_FAMILY: &str = "sans-serif";

/// Parsed font file, kept around to measure glyph advances
#[derive(Clone)]
struct FaceData {
    data: Arc<Vec<u8>>,
    face_index: u32,
    units_per_em: u16,
    space_advance: u16,
}

/// Horizontal metrics of a font.
/// Without a font file, widths are estimated from the character classes.
#[derive(Clone)]
pub struct FontMetrics {
    pub family: String,
    /// Height of the ascender as a fraction of the font size
    pub ascent: f32,
    face: Option<FaceData>,
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics")
            .field("family", &self.family)
            .field("ascent", &self.ascent)
            .field("loaded", &self.face.is_some())
            .finish()
    }
}

impl FontMetrics {
    pub fn fallback() -> Self {
        Self {
            family: FALLBACK_FAMILY.to_string(),
            ascent: 0.8,
            face: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read(path).with_context(|| format!("failed to read font: {}", path.display()))?;
        Self::from_data(data)
            .map_err(|err| anyhow!("failed to parse font: {} ({})", path.display(), err))
    }

    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        let count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
        let parsed = (0..count).find_map(|face_index| {
            let face = Face::parse(&data, face_index).ok()?;
            let units_per_em = face.units_per_em().max(1);
            let space_advance = face
                .glyph_index(' ')
                .and_then(|id| face.glyph_hor_advance(id))
                .unwrap_or(units_per_em / 2);
            let family = extract_family_name(&face);
            let ascent = face.ascender() as f32 / units_per_em as f32;
            Some((face_index, units_per_em, space_advance, family, ascent))
        });
        let Some((face_index, units_per_em, space_advance, family, ascent)) = parsed else {
            return Err(anyhow!("no parsable face in font data"));
        };

        Ok(Self {
            family: family.unwrap_or_else(|| FALLBACK_FAMILY.to_string()),
            ascent,
            face: Some(FaceData {
                data: Arc::new(data),
                face_index,
                units_per_em,
                space_advance,
            }),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.face.is_some()
    }

    /// Width of `text` set at `font_size`, in points.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        if let Some(fd) = &self.face {
            if let Ok(face) = Face::parse(&fd.data, fd.face_index) {
                let advance = text
                    .chars()
                    .filter(|ch| *ch != '\n')
                    .map(|ch| {
                        face.glyph_index(ch)
                            .and_then(|id| face.glyph_hor_advance(id))
                            .unwrap_or(fd.space_advance) as u32
                    })
                    .fold(0u32, |acc, a| acc.saturating_add(a));
                return advance as f32 * (font_size / fd.units_per_em as f32);
            }
        }
        estimate_text_width_units(text) * font_size
    }

    pub fn space_width(&self, font_size: f32) -> f32 {
        self.text_width(" ", font_size)
    }
}

fn estimate_char_units(ch: char) -> f32 {
    if ch.is_whitespace() {
        0.25
    } else if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
        0.65
    } else if ch.is_ascii_alphanumeric() {
        0.55
    } else if ch.is_ascii() {
        0.35
    } else {
        0.9
    }
}

fn estimate_text_width_units(text: &str) -> f32 {
    text.chars().map(estimate_char_units).sum()
}

fn extract_family_name(face: &Face<'_>) -> Option<String> {
    let mut fallback = None;
    for name in face.names() {
        if name.name_id == name_id::TYPOGRAPHIC_FAMILY {
            if let Some(value) = name.to_string() {
                return Some(value);
            }
        } else if name.name_id == name_id::FAMILY && fallback.is_none() {
            fallback = name.to_string();
        }
    }
    fallback
}

/// Recursively collects all `.ttf` files in `dir`, sorted by path.
pub fn find_font_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = vec![];
    collect_font_files(dir, &mut found);
    found.sort();
    found
}

fn collect_font_files(dir: &Path, found: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        debug!("[FONT] skipping unreadable font directory {}", dir.display());
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_font_files(&path, found);
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"))
        {
            found.push(path);
        }
    }
}

/// Loads all configured fonts.
/// A font which fails to load is replaced by the fallback metrics, so loading never fails.
pub fn load_fonts(config: &FontConfig) -> Vec<FontMetrics> {
    let paths = config
        .font_paths
        .iter()
        .cloned()
        .chain(config.font_dirs.iter().flat_map(|dir| find_font_files(dir)))
        .collect::<Vec<_>>();

    let fonts = paths
        .iter()
        .map(|path| match FontMetrics::load(path) {
            Ok(font) => font,
            Err(err) => {
                warn!("[FONT] {err:#}, using {FALLBACK_FAMILY}");
                FontMetrics::fallback()
            }
        })
        .collect::<Vec<_>>();

    match fonts.is_empty() {
        true => {
            warn!("[FONT] no fonts found, using {FALLBACK_FAMILY}");
            vec![FontMetrics::fallback()]
        }
        false => {
            info!(
                "[FONT] loaded {} fonts ({} usable)",
                fonts.len(),
                fonts.iter().filter(|f| f.is_loaded()).count()
            );
            fonts
        }
    }
}
