pub mod bounds;
pub mod occupancy;
pub mod partition;

pub use bounds::BoundingRect;
pub use occupancy::{BlockStatus, Occupancy};
pub use partition::{Group, partition};
