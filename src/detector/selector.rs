use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{HttpRequest, NetworkService};
use super::exploit::PotentialExploit;
use tracing::debug;

/// Deduplicates candidates, orders them for testing and keeps the first
/// `budget`. When several generation paths produce the same request for the
/// same service, the best-priority one is kept.
pub fn select_for_testing<I>(candidates: I, budget: usize) -> Vec<PotentialExploit>
where
    I: IntoIterator<Item = PotentialExploit>,
{
    let mut seen: HashMap<(HttpRequest, Arc<NetworkService>), PotentialExploit> = HashMap::new();
    let mut total = 0usize;

    for candidate in candidates {
        total += 1;
        let key = (candidate.request().clone(), Arc::clone(candidate.service()));
        match seen.entry(key) {
            Entry::Vacant(e) => {
                e.insert(candidate);
            }
            Entry::Occupied(mut e) => {
                if candidate.priority() < e.get().priority() {
                    e.insert(candidate);
                }
            }
        }
    }

    let mut selected: Vec<PotentialExploit> = seen.into_values().collect();
    let unique = selected.len();
    selected.sort_by(|a, b| a.testing_order(b));
    selected.truncate(budget);

    debug!(total, unique, selected = selected.len(), budget, "Selected candidates for testing");
    selected
}
