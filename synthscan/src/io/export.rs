use crate::entities::PageState;
use crate::geometry::BoundingBox;
use crate::io::ext_repr::{ExtBoundingBox, ExtPage, ExtTextElement};
use crate::packing::FinishedPage;
use itertools::Itertools;
use std::path::Path;

pub fn export_bbox(bbox: &BoundingBox) -> ExtBoundingBox {
    ExtBoundingBox {
        x0: bbox.x0,
        y0: bbox.y0,
        x1: bbox.x1,
        y1: bbox.y1,
        width: bbox.width(),
        height: bbox.height(),
        centroid_x: bbox.centroid_x(),
        centroid_y: bbox.centroid_y(),
    }
}

/// Exports a finalized page out of the library
pub fn export_page(page: &PageState, page_path: &Path) -> ExtPage {
    ExtPage {
        page_number: page.page_index,
        page_path: page_path.display().to_string(),
        page_width: page.page_width,
        page_height: page.page_height,
        full_text: page.full_text().to_string(),
        text_elements: page
            .placed_text_elements()
            .iter()
            .map(|pt| ExtTextElement {
                bbox: export_bbox(&pt.bbox),
                text: pt.text.clone(),
            })
            .collect(),
    }
}

/// Exports all finalized pages, in order
pub fn export_pages(pages: &[FinishedPage]) -> Vec<ExtPage> {
    pages
        .iter()
        .map(|fp| export_page(&fp.page, &fp.path))
        .collect_vec()
}
