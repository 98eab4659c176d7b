//! Pure algorithms for the peer roster
//!
//! - `classifier`: engine status token to `ConnectionState`
//! - `byte_format`: byte counters to human-scaled text
//! - `view`: status filter + search composition and aggregate counts

pub mod byte_format;
pub mod classifier;
pub mod view;

pub use byte_format::format_bytes;
pub use classifier::classify;
pub use view::{counts, visible};
