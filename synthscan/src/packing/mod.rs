mod collaborators;
mod error;
mod packer;

#[doc(inline)]
pub use collaborators::{Augmenter, Measured, PageSink, TextRenderer};
#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use packer::{FinishedPage, PagePacker, Transition};
