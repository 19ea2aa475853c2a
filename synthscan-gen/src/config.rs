use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use synthscan::util::PackerConfig;

use crate::render::SvgDrawOptions;

/// Configuration of the page generator
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenConfig {
    /// Seed for the PRNG. If undefined, the generator will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Dimensions of every page, in points
    pub page_size: PageSize,
    pub packer: PackerConfig,
    pub style: StyleConfig,
    pub augment: AugmentConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    /// Only the first `max_items` texts of the input are used
    pub max_items: Option<usize>,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US letter, in points
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// A binomially distributed integer, shifted by `offset`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BinomialParams {
    pub n: u64,
    pub p: f64,
    pub offset: u64,
}

/// Presentation parameters of the text images
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub words_per_line: BinomialParams,
    pub font_size: BinomialParams,
    /// Blank border around the text, in points
    pub padding: f32,
    /// Line height as a multiple of the font size
    pub line_spacing: f32,
    /// Probability of a word being struck through
    pub strikethrough_prob: f64,
    /// Probability of a word being set in bold
    pub bold_prob: f64,
    /// Probability of a word being set in upper case
    pub uppercase_prob: f64,
}

/// Random augmentations applied to every text image
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AugmentConfig {
    /// Probability of leaving the image untouched
    pub skip_prob: f64,
    /// Upper bound on the number of distinct augmentations applied to a single image
    pub max_augmentations: usize,
    pub stretch_range: (f32, f32),
    pub compress_range: (f32, f32),
    /// Range of the saturation factor of the color degradation
    pub saturation_range: (f32, f32),
    /// Rotation angles are drawn from `[-max_rotation_deg, max_rotation_deg]`
    pub max_rotation_deg: f32,
}

/// Where to look for TrueType fonts
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FontConfig {
    /// Individual font files
    #[serde(default)]
    pub font_paths: Vec<PathBuf>,
    /// Directories searched recursively for `.ttf` files
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_paths: vec![],
            font_dirs: vec![
                PathBuf::from("/usr/share/fonts"),
                PathBuf::from("/usr/local/share/fonts"),
            ],
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            words_per_line: BinomialParams {
                n: 10,
                p: 0.5,
                offset: 3,
            },
            font_size: BinomialParams {
                n: 22,
                p: 0.5,
                offset: 4,
            },
            padding: 20.0,
            line_spacing: 1.2,
            strikethrough_prob: 0.01,
            bold_prob: 0.01,
            uppercase_prob: 0.03,
        }
    }
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            skip_prob: 0.5,
            max_augmentations: 3,
            stretch_range: (1.1, 1.3),
            compress_range: (0.7, 0.9),
            saturation_range: (0.3, 0.8),
            max_rotation_deg: 25.0,
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            page_size: PageSize::LETTER,
            packer: PackerConfig::default(),
            style: StyleConfig::default(),
            augment: AugmentConfig::default(),
            fonts: FontConfig::default(),
            max_items: Some(100),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
