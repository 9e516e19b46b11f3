pub mod clock;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use scheduler::SrsEngine;
