use crate::entities::PageState;
use crate::geometry::{BoundingBox, ImageSize};
use anyhow::Result;
use rand::Rng;
use std::path::PathBuf;

/// Anything with a measurable footprint on a page.
pub trait Measured {
    fn size(&self) -> ImageSize;
}

/// Turns a text into a styled image.
/// Presentation parameters (line wrapping, font, font size, ...) are drawn from `rng`
/// on every call, so repeated calls for the same text may yield differently sized images.
pub trait TextRenderer {
    type Image: Measured;

    fn render(&mut self, text: &str, rng: &mut impl Rng) -> Result<Self::Image>;
}

/// Applies a random visual augmentation to an image. The size of the image may change.
pub trait Augmenter<I> {
    fn augment(&self, image: I, rng: &mut impl Rng) -> I;
}

/// Draws images onto pages and persists finished pages.
///
/// A canvas is handed out per page and consumed by [`PageSink::finalize`],
/// so nothing can be drawn on a page after it has been written out.
pub trait PageSink<I> {
    type Canvas;

    fn open_page(&mut self, page: &PageState) -> Result<Self::Canvas>;

    /// Draws `image` centered on `(x_centroid, y_centroid)` and returns its footprint.
    fn place(
        &mut self,
        canvas: &mut Self::Canvas,
        image: &I,
        x_centroid: f32,
        y_centroid: f32,
    ) -> Result<BoundingBox>;

    /// Writes out the page and returns the location it was written to.
    fn finalize(&mut self, canvas: Self::Canvas, page: &PageState) -> Result<PathBuf>;
}
