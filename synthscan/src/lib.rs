//! Placement engine for synthetic scanned-document pages.
//!
//! Text images of arbitrary size are dropped onto fixed-size pages one at a time,
//! without overlap and without leaving the page. When no position can be found,
//! the page is finalized and a fresh one is started.

/// Axis-aligned boxes, image sizes and the predicates between them
pub mod geometry;

/// Validating and searching candidate centroids on a page
pub mod placement;

/// Pages and the text elements placed on them
pub mod entities;

/// Drives the page-by-page packing of a stream of text items
pub mod packing;

/// Exporting pages out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
