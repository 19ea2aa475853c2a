use anyhow::{Result, anyhow, ensure};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_distr::{Binomial, Distribution};
use synthscan::geometry::ImageSize;
use synthscan::packing::{Measured, TextRenderer};

use crate::config::{BinomialParams, StyleConfig};
use crate::render::{Augmentation, FontMetrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStyle {
    Normal,
    Bold,
    Strikethrough,
}

/// A word as it is drawn, with its horizontal position inside the image
#[derive(Clone, Debug, PartialEq)]
pub struct StyledWord {
    pub text: String,
    pub style: WordStyle,
    pub x: f32,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub words: Vec<StyledWord>,
    /// Top of the line, measured from the top of the image
    pub y: f32,
    pub width: f32,
}

/// A text laid out as an image, before and after augmentation.
/// Word positions are expressed in the coordinates of the unaugmented image.
#[derive(Clone, Debug)]
pub struct TextImage {
    pub source_text: String,
    pub font_family: String,
    pub font_size: f32,
    /// Distance from the top of a line to its baseline
    pub ascent: f32,
    pub lines: Vec<TextLine>,
    /// Size of the unaugmented image
    pub base_size: ImageSize,
    /// Augmentations in the order they were applied
    pub augmentations: Vec<Augmentation>,
    width: f32,
    height: f32,
}

impl Measured for TextImage {
    fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl TextImage {
    /// Lays out `text` in lines of `words_per_line` words, centered horizontally.
    pub fn layout(
        text: &str,
        words_per_line: usize,
        font: &FontMetrics,
        font_size: f32,
        style: &StyleConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        ensure!(words_per_line > 0, "at least one word per line is required");
        ensure!(font_size > 0.0, "invalid font size: {font_size}");

        let words = text.split_whitespace().collect::<Vec<_>>();
        let space_width = font.space_width(font_size);

        let mut lines = words
            .chunks(words_per_line)
            .map(|group| {
                let words = group
                    .iter()
                    .map(|w| {
                        let (text, word_style) = pick_style(w, style, rng);
                        let width = font.text_width(&text, font_size);
                        StyledWord {
                            text,
                            style: word_style,
                            x: 0.0,
                            width,
                        }
                    })
                    .collect::<Vec<_>>();
                let width = words.iter().map(|w| w.width).sum::<f32>()
                    + space_width * words.len().saturating_sub(1) as f32;
                TextLine {
                    words,
                    y: 0.0,
                    width,
                }
            })
            .collect::<Vec<_>>();

        let padding = style.padding;
        let max_line_width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
        let width = (max_line_width + 2.0 * padding).ceil();
        let line_height = (font_size * style.line_spacing).floor();
        let height = lines.len() as f32 * line_height + 2.0 * padding;

        for (i, line) in lines.iter_mut().enumerate() {
            line.y = padding + i as f32 * line_height;
            let mut x = padding + ((width - 2.0 * padding - line.width) / 2.0).floor();
            for word in line.words.iter_mut() {
                word.x = x;
                x += word.width + space_width;
            }
        }

        let base_size = ImageSize::try_new(width, height)?;

        Ok(Self {
            source_text: text.to_string(),
            font_family: font.family.clone(),
            font_size,
            ascent: font.ascent * font_size,
            lines,
            base_size,
            augmentations: vec![],
            width,
            height,
        })
    }

    /// The text as it appears in the image, one line per row
    pub fn rendered_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| {
                l.words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Applies an augmentation and updates the size of the image accordingly.
    pub fn apply(&mut self, augmentation: Augmentation) {
        let applied = match augmentation {
            Augmentation::Resize { sx, sy } => {
                let new_width = (self.width * sx).floor();
                let new_height = (self.height * sy).floor();
                let applied = Augmentation::Resize {
                    sx: effective_ratio(new_width, self.width),
                    sy: effective_ratio(new_height, self.height),
                };
                self.width = new_width;
                self.height = new_height;
                applied
            }
            Augmentation::Rotation { degrees } => {
                //the canvas is expanded to fit the rotated image
                let (sin, cos) = degrees.to_radians().sin_cos();
                let (w, h) = (self.width, self.height);
                self.width = (w * cos.abs() + h * sin.abs()).ceil();
                self.height = (w * sin.abs() + h * cos.abs()).ceil();
                augmentation
            }
            Augmentation::ColorDegradation { .. } => augmentation,
        };
        self.augmentations.push(applied);
    }

    /// Product of all color degradation factors
    pub fn saturation(&self) -> f32 {
        self.augmentations
            .iter()
            .filter_map(|a| match a {
                Augmentation::ColorDegradation { saturation } => Some(*saturation),
                _ => None,
            })
            .product()
    }
}

fn effective_ratio(new: f32, old: f32) -> f32 {
    match old > 0.0 {
        true => new / old,
        false => 1.0,
    }
}

fn pick_style(word: &str, style: &StyleConfig, rng: &mut impl Rng) -> (String, WordStyle) {
    let r = rng.random::<f64>();
    if r < style.strikethrough_prob {
        (word.to_string(), WordStyle::Strikethrough)
    } else if r < style.strikethrough_prob + style.bold_prob {
        (word.to_string(), WordStyle::Bold)
    } else if r < style.strikethrough_prob + style.bold_prob + style.uppercase_prob {
        (word.to_uppercase(), WordStyle::Normal)
    } else {
        (word.to_string(), WordStyle::Normal)
    }
}

/// Shifted binomial distribution
#[derive(Clone, Debug)]
struct ShiftedBinomial {
    distr: Binomial,
    offset: u64,
}

impl ShiftedBinomial {
    fn new(params: BinomialParams) -> Result<Self> {
        let distr = Binomial::new(params.n, params.p)
            .map_err(|e| anyhow!("invalid binomial parameters {params:?}: {e}"))?;
        Ok(Self {
            distr,
            offset: params.offset,
        })
    }

    fn sample(&self, rng: &mut impl Rng) -> u64 {
        self.distr.sample(rng) + self.offset
    }
}

/// Renders texts as [`TextImage`]s with randomized presentation:
/// words per line, font and font size are drawn anew for every image.
pub struct TextImageGenerator {
    pub fonts: Vec<FontMetrics>,
    pub style: StyleConfig,
    words_per_line: ShiftedBinomial,
    font_size: ShiftedBinomial,
}

impl TextImageGenerator {
    pub fn new(fonts: Vec<FontMetrics>, style: StyleConfig) -> Result<Self> {
        ensure!(!fonts.is_empty(), "at least one font is required");
        Ok(Self {
            fonts,
            style,
            words_per_line: ShiftedBinomial::new(style.words_per_line)?,
            font_size: ShiftedBinomial::new(style.font_size)?,
        })
    }
}

impl TextRenderer for TextImageGenerator {
    type Image = TextImage;

    fn render(&mut self, text: &str, rng: &mut impl Rng) -> Result<TextImage> {
        let words_per_line = self.words_per_line.sample(rng).max(1) as usize;
        let font = self
            .fonts
            .choose(rng)
            .ok_or_else(|| anyhow!("no fonts available"))?;
        let font_size = self.font_size.sample(rng).max(1) as f32;
        TextImage::layout(text, words_per_line, font, font_size, &self.style, rng)
    }
}
