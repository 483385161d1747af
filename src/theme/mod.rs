//! Visual theme for the feed page.

mod styles;

pub use styles::GLOBAL_STYLES;
