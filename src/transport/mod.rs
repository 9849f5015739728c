mod client;
mod types;

pub use client::{HttpTransport, REQUEST_TIMEOUT, Transport};
pub use types::{RawResponse, TransportFailure, Upload};
