use crate::entities::PageState;
use crate::geometry::BoundingBox;
use crate::util::FPA;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks that no two boxes on the page overlap and that every box lies on the page.
pub fn page_is_valid(page: &PageState) -> bool {
    let boxes = page.existing_boxes();
    for (i, b) in boxes.iter().enumerate() {
        if !box_within_page(b, page.page_width, page.page_height) {
            error!("box {i} {b:?} exceeds page {}", page.page_index);
            return false;
        }
        if let Some(j) = boxes[i + 1..].iter().position(|o| b.overlaps(o)) {
            error!("box {i} overlaps box {} on page {}", i + 1 + j, page.page_index);
            return false;
        }
    }
    boxes.len() == page.placed_text_elements().len()
}

/// Bounds check with a small tolerance for rounding in the centroid/box conversion.
pub fn box_within_page(b: &BoundingBox, page_width: f32, page_height: f32) -> bool {
    FPA(b.x0) >= FPA(0.0)
        && FPA(b.y0) >= FPA(0.0)
        && FPA(b.x1) <= FPA(page_width)
        && FPA(b.y1) <= FPA(page_height)
}
