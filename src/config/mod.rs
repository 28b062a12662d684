pub mod sponsors;
pub mod validate;

pub use sponsors::{GridConfig, SponsorConfig};
pub use validate::{OverlapPolicy, validate};
