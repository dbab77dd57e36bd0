mod bucket;
mod iter;
mod sample;
mod stats;

pub use iter::WindowIter;
pub use sample::Sample;
pub use stats::{WindowStats, DEFAULT_WINDOW};
