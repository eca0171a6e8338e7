pub mod finding;
pub mod request;
pub mod service;

pub use finding::*;
pub use request::*;
pub use service::*;
