use crate::geometry::{BoundingBox, ImageSize};
use crate::placement::can_place;
use crate::util::GridSearchConfig;
use log::trace;

/// Deterministic grid search for a centroid where an image of `size` can be placed.
///
/// Candidates are scanned in raster order, x in the outer loop and y in the inner loop,
/// both ascending, and the first valid candidate is returned.
/// Every coordinate is an integer: the scan starts at the truncated lower bound of the
/// valid centroid range and stops before the truncated upper bound.
/// If a full scan yields nothing, it is repeated with the step halved for as long as
/// the previous step exceeded `config.min_step`.
///
/// The grid may skip over valid positions, so `None` does not prove that the image cannot be placed.
pub fn find_placement(
    size: ImageSize,
    existing_boxes: &[BoundingBox],
    page_width: f32,
    page_height: f32,
    config: &GridSearchConfig,
) -> Option<(f32, f32)> {
    let x_min = config.margin + size.width / 2.0;
    let y_min = config.margin + size.height / 2.0;
    let x_max = page_width - config.margin - size.width / 2.0;
    let y_max = page_height - config.margin - size.height / 2.0;

    // float to int casts truncate towards zero
    let (x_start, x_end) = (x_min as i64, x_max as i64);
    let (y_start, y_end) = (y_min as i64, y_max as i64);

    for step in step_sizes(config.initial_step, config.min_step) {
        trace!("[GS] scanning with step {step}");
        for x in (x_start..x_end).step_by(step as usize) {
            for y in (y_start..y_end).step_by(step as usize) {
                let (x, y) = (x as f32, y as f32);
                if can_place(size, x, y, existing_boxes, page_width, page_height) {
                    return Some((x, y));
                }
            }
        }
    }
    None
}

/// Sequence of step sizes used by [`find_placement`]: `initial_step`, followed by
/// repeated (floor) halvings for as long as the previous step exceeded `min_step`.
/// A zero step is never produced.
pub fn step_sizes(initial_step: u32, min_step: u32) -> impl Iterator<Item = u32> {
    std::iter::successors(Some(initial_step), move |&s| (s > min_step).then_some(s / 2))
        .take_while(|&s| s > 0)
}
