mod evaluator;
mod sampler;
mod search;

#[doc(inline)]
pub use evaluator::can_place;
#[doc(inline)]
pub use sampler::UniformCentroidSampler;
#[doc(inline)]
pub use search::{find_placement, step_sizes};
