use crate::geometry::ImageSize;
use crate::geometry::geo_traits::{CollidesWith, FitsWithin};
use anyhow::{Result, ensure};

/// Axis-aligned footprint of a placed image, in page coordinates.
/// `x0`/`y0` is the minimum corner, `x1`/`y1` the maximum corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn try_new(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self> {
        ensure!(
            x0 <= x1 && y0 <= y1,
            "invalid bounding box, x0: {x0}, x1: {x1}, y0: {y0}, y1: {y1}"
        );
        Ok(BoundingBox { x0, y0, x1, y1 })
    }

    /// Centers a box of `size` on the centroid `(x_centroid, y_centroid)`.
    pub fn for_placement(size: ImageSize, x_centroid: f32, y_centroid: f32) -> Self {
        let x0 = x_centroid - size.width / 2.0;
        let y0 = y_centroid - size.height / 2.0;
        BoundingBox {
            x0,
            y0,
            x1: x0 + size.width,
            y1: y0 + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn centroid_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    pub fn centroid_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    pub fn centroid(&self) -> (f32, f32) {
        (self.centroid_x(), self.centroid_y())
    }

    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Whether `self` and `other` overlap. Boxes sharing an edge or a corner do overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.collides_with(other)
    }

    /// Whether `self` lies entirely within a page spanning `[0, page_width] x [0, page_height]`.
    #[inline(always)]
    pub fn within_bounds(&self, page_width: f32, page_height: f32) -> bool {
        self.fits_within(page_width, page_height)
    }
}

impl CollidesWith<BoundingBox> for BoundingBox {
    #[inline(always)]
    fn collides_with(&self, other: &BoundingBox) -> bool {
        f32::max(self.x0, other.x0) <= f32::min(self.x1, other.x1)
            && f32::max(self.y0, other.y0) <= f32::min(self.y1, other.y1)
    }
}

impl FitsWithin for BoundingBox {
    #[inline(always)]
    fn fits_within(&self, page_width: f32, page_height: f32) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= page_width && self.y1 <= page_height
    }
}
