use crate::geometry::BoundingBox;

/// A text item which has been placed on a page, together with its footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub bbox: BoundingBox,
    pub text: String,
}

/// State of the page currently being filled.
/// Boxes are only ever appended, a new page starts out empty.
#[derive(Clone, Debug)]
pub struct PageState {
    pub page_index: usize,
    pub page_width: f32,
    pub page_height: f32,
    existing_boxes: Vec<BoundingBox>,
    placed_text_elements: Vec<PlacedText>,
    full_text: String,
}

impl PageState {
    pub fn new(page_index: usize, page_width: f32, page_height: f32) -> Self {
        Self {
            page_index,
            page_width,
            page_height,
            existing_boxes: vec![],
            placed_text_elements: vec![],
            full_text: String::new(),
        }
    }

    /// Empty page following `self`, with the same dimensions.
    pub fn next(&self) -> Self {
        PageState::new(self.page_index + 1, self.page_width, self.page_height)
    }

    /// Registers a placed text image on the page.
    pub fn register(&mut self, bbox: BoundingBox, text: &str) {
        self.existing_boxes.push(bbox);
        self.placed_text_elements.push(PlacedText {
            bbox,
            text: text.to_string(),
        });
        self.full_text.push_str(text);
        self.full_text.push(' ');
    }

    pub fn existing_boxes(&self) -> &[BoundingBox] {
        &self.existing_boxes
    }

    pub fn placed_text_elements(&self) -> &[PlacedText] {
        &self.placed_text_elements
    }

    /// All placed texts, in placement order, each followed by a single space.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn is_empty(&self) -> bool {
        self.existing_boxes.is_empty()
    }

    pub fn n_placed(&self) -> usize {
        self.existing_boxes.len()
    }

    /// Fraction of the page area covered by placed boxes
    pub fn density(&self) -> f32 {
        let page_area = self.page_width * self.page_height;
        match page_area > 0.0 {
            true => self.existing_boxes.iter().map(|b| b.area()).sum::<f32>() / page_area,
            false => 0.0,
        }
    }
}
