pub mod layout;
pub mod report;
pub mod style;

pub use layout::{GridLayout, SponsorLayout, layout_sponsor, render};
pub use report::{GridStats, LayoutReport};
pub use style::{StyleRule, stylesheet};
