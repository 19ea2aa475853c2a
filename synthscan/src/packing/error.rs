use thiserror::Error;

use crate::packing::FinishedPage;

#[derive(Debug, Error)]
pub enum PackError {
    /// The item kept causing rollovers onto fresh pages without ever being placed.
    /// `pages` holds every page finalized before giving up, in order.
    #[error(
        "item {item_index} could not be placed after {rollovers} page rollovers ({} pages finalized)",
        .pages.len()
    )]
    PlacementExhausted {
        item_index: usize,
        rollovers: usize,
        pages: Vec<FinishedPage>,
    },
    /// A collaborator (renderer, augmenter or page sink) failed.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
