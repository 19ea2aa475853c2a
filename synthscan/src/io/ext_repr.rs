use serde::{Deserialize, Serialize};

/// Footprint of a placed text image
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub height: f32,
    pub centroid_x: f32,
    pub centroid_y: f32,
}

/// A text placed on a page, the ground truth for its image
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtTextElement {
    pub bbox: ExtBoundingBox,
    pub text: String,
}

/// A finalized page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPage {
    /// Index of the page, starting from 0
    pub page_number: usize,
    /// Where the page was written to
    pub page_path: String,
    pub page_width: f32,
    pub page_height: f32,
    /// Concatenation of all texts on the page, each followed by a space
    pub full_text: String,
    pub text_elements: Vec<ExtTextElement>,
}
