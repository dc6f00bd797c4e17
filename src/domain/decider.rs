//! Access decision
//!
//! Combines the two list lookups into one tri-state decision. The function
//! is total: sentinel candidates decide as Unknown rather than being
//! filtered out by the caller.

use crate::infrastructure::AccessList;
use crate::types::{AccessStatus, PlateCandidate};

/// Decide access for an extracted plate.
///
/// Precedence, first match wins:
/// 1. sentinel candidate (no plate extracted) -> Unknown
/// 2. plate on the deny list -> Denied
/// 3. plate on the allow list -> Granted
/// 4. otherwise -> Unknown
///
/// Deny always wins over allow; a plate on both lists is Denied.
pub fn decide(
    candidate: &PlateCandidate,
    deny_list: &AccessList,
    allow_list: &AccessList,
) -> AccessStatus {
    let plate = match candidate.as_plate() {
        Some(plate) => plate,
        None => return AccessStatus::Unknown,
    };

    if deny_list.contains(plate) {
        AccessStatus::Denied
    } else if allow_list.contains(plate) {
        AccessStatus::Granted
    } else {
        AccessStatus::Unknown
    }
}
