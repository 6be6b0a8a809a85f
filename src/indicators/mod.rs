pub mod moving_average;
pub mod trend_strength;

pub use moving_average::{ma_alignment, MaAlignment};
pub use trend_strength::{trend_strength, TREND_STRENGTH_PERIOD};
