mod frame;
mod group;
mod lanes;
pub(crate) mod types;

pub use frame::compute_frame;
pub use types::*;
