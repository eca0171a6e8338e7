pub mod exploit;
pub mod filter;
pub mod generator;
pub mod payloads;
pub mod pipeline;
pub mod report;
pub mod selector;
pub mod verifier;

pub use exploit::{InjectionPointOrder, PotentialExploit, Priority};
pub use filter::{select_crawl_targets, should_fuzz};
pub use generator::ExploitGenerator;
pub use payloads::TraversalProfile;
pub use pipeline::GenericPathTraversalDetector;
pub use selector::select_for_testing;
pub use verifier::Verifier;
