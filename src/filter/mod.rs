mod classify;
mod range;

pub use classify::{classify, Classification};
pub use range::{RangeState, WALK_CEILING, WALK_FLOOR};
