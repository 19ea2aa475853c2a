use crate::geometry::{BoundingBox, ImageSize};

/// Checks whether an image of `size`, centered on `(x_centroid, y_centroid)`,
/// stays within the page and does not overlap any of the `existing_boxes`.
pub fn can_place(
    size: ImageSize,
    x_centroid: f32,
    y_centroid: f32,
    existing_boxes: &[BoundingBox],
    page_width: f32,
    page_height: f32,
) -> bool {
    let candidate = BoundingBox::for_placement(size, x_centroid, y_centroid);
    if !candidate.within_bounds(page_width, page_height) {
        return false;
    }
    !existing_boxes.iter().any(|b| candidate.overlaps(b))
}
