pub mod clock;
pub mod config;
pub mod detector;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod transport;

pub use clock::{Clock, FixedClock, UtcClock};
pub use config::{DetectorConfig, InjectionPoint};
pub use detector::GenericPathTraversalDetector;
pub use errors::{DetectorError, TransportError};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
