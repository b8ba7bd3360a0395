//! Delivery domain module

mod backend;
mod bundle_id;
mod linger;

pub use backend::{BackendId, ALL_BACKENDS};
pub use bundle_id::validate_bundle_id;
pub use linger::{Linger, DEFAULT_LINGER_MILLIS, MAX_LINGER_MILLIS};
