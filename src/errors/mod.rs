pub mod types;

pub use types::{DetectorError, TransportError};
