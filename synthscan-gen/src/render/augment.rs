use rand::Rng;
use rand::seq::index;
use synthscan::packing::Augmenter;

use crate::config::AugmentConfig;
use crate::render::TextImage;

/// The kinds of augmentation an image can undergo, each at most once per image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AugmentationKind {
    StretchHorizontal,
    StretchVertical,
    CompressHorizontal,
    CompressVertical,
    ColorDegradation,
    Rotation,
}

impl AugmentationKind {
    pub const ALL: [AugmentationKind; 6] = [
        AugmentationKind::StretchHorizontal,
        AugmentationKind::StretchVertical,
        AugmentationKind::CompressHorizontal,
        AugmentationKind::CompressVertical,
        AugmentationKind::ColorDegradation,
        AugmentationKind::Rotation,
    ];

    /// Draws the parameters of an augmentation of this kind
    pub fn sample(&self, config: &AugmentConfig, rng: &mut impl Rng) -> Augmentation {
        let mut factor = |(lo, hi): (f32, f32)| match lo < hi {
            true => rng.random_range(lo..=hi),
            false => lo,
        };
        match self {
            AugmentationKind::StretchHorizontal => Augmentation::Resize {
                sx: factor(config.stretch_range),
                sy: 1.0,
            },
            AugmentationKind::StretchVertical => Augmentation::Resize {
                sx: 1.0,
                sy: factor(config.stretch_range),
            },
            AugmentationKind::CompressHorizontal => Augmentation::Resize {
                sx: factor(config.compress_range),
                sy: 1.0,
            },
            AugmentationKind::CompressVertical => Augmentation::Resize {
                sx: 1.0,
                sy: factor(config.compress_range),
            },
            AugmentationKind::ColorDegradation => Augmentation::ColorDegradation {
                saturation: factor(config.saturation_range),
            },
            AugmentationKind::Rotation => Augmentation::Rotation {
                degrees: factor((-config.max_rotation_deg, config.max_rotation_deg)),
            },
        }
    }
}

/// A concrete augmentation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Augmentation {
    /// Scales the image by `sx` horizontally and `sy` vertically
    Resize { sx: f32, sy: f32 },
    /// Multiplies the color saturation by `saturation`
    ColorDegradation { saturation: f32 },
    /// Counter-clockwise rotation around the center, the canvas grows to fit the result
    Rotation { degrees: f32 },
}

/// Leaves an image untouched with probability `skip_prob`, otherwise applies
/// between 1 and `max_augmentations` distinct augmentations in random order.
#[derive(Clone, Copy, Debug)]
pub struct RandomAugmenter {
    pub config: AugmentConfig,
}

impl RandomAugmenter {
    pub fn new(config: AugmentConfig) -> Self {
        Self { config }
    }
}

impl Augmenter<TextImage> for RandomAugmenter {
    fn augment(&self, mut image: TextImage, rng: &mut impl Rng) -> TextImage {
        if rng.random::<f64>() < self.config.skip_prob {
            return image;
        }
        let max = self
            .config
            .max_augmentations
            .clamp(1, AugmentationKind::ALL.len());
        let n = rng.random_range(1..=max);
        // the selected indices come out in random order
        for i in index::sample(rng, AugmentationKind::ALL.len(), n) {
            let augmentation = AugmentationKind::ALL[i].sample(&self.config, rng);
            image.apply(augmentation);
        }
        image
    }
}
