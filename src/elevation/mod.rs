mod client;
mod lookup;
mod lookup_response;

pub use client::{ElevationClientError, new_client};
pub use lookup::{ElevationError, fetch};
