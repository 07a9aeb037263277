pub mod clock;
pub mod lenient;

pub use clock::{Clock, FixedClock, SystemClock};
