pub mod alliance;
pub mod feed;
pub mod schedule;

pub use alliance::*;
pub use feed::*;
pub use schedule::*;
