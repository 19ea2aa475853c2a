pub mod assertions;
mod config;
mod fpa;

#[doc(inline)]
pub use config::*;
#[doc(inline)]
pub use fpa::FPA;
