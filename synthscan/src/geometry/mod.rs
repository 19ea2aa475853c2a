mod bbox;
mod size;

pub mod geo_traits;

#[doc(inline)]
pub use bbox::BoundingBox;
#[doc(inline)]
pub use size::ImageSize;
