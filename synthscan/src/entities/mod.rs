mod page;

#[doc(inline)]
pub use page::PageState;
#[doc(inline)]
pub use page::PlacedText;
