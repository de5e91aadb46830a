use std::collections::{HashMap, HashSet};

use pledge_core::models::{ChainTermination, ThreadChain};
use pledge_core::ThreadEntry;

/// Iterative backward walk over `in_reply_to` links.
///
/// Terminates on a root, a missing parent, a revisited id, or once
/// `max_depth` entries have been collected. Returned entries are root first.
pub(crate) fn walk_back(
    entries: &HashMap<String, ThreadEntry>,
    message_id: &str,
    max_depth: usize,
) -> ThreadChain {
    let Some(mut current) = entries.get(message_id) else {
        return ThreadChain::not_found();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut collected: Vec<ThreadEntry> = Vec::new();

    let termination = loop {
        visited.insert(current.message_id.as_str());
        collected.push(current.clone());

        let Some(parent_id) = current.in_reply_to.as_deref() else {
            break ChainTermination::Root;
        };
        if visited.contains(parent_id) {
            break ChainTermination::Cycle {
                message_id: parent_id.to_string(),
            };
        }
        if collected.len() >= max_depth {
            break ChainTermination::DepthLimit;
        }
        match entries.get(parent_id) {
            Some(parent) => current = parent,
            None => {
                break ChainTermination::MissingParent {
                    message_id: parent_id.to_string(),
                }
            }
        }
    };

    collected.reverse();
    ThreadChain {
        entries: collected,
        termination,
    }
}
