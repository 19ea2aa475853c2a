mod export;

/// External (serializable) representations of pages and their contents.
pub mod ext_repr;

#[doc(inline)]
pub use export::{export_bbox, export_page, export_pages};
