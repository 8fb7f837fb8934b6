use ahash::RandomState;
use std::collections::HashSet;

use super::record::MatchRecord;

/// Canonical ids (see [`super::MatchId::key`]) of matches confirmed live by
/// the live listing.
pub type LiveIdSet = HashSet<String, RandomState>;

#[must_use]
pub fn live_id_set(live: &[MatchRecord]) -> LiveIdSet {
    live.iter().filter_map(MatchRecord::id_key).collect()
}

#[must_use]
pub fn is_football(record: &MatchRecord) -> bool {
    record
        .category
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case("football"))
}

#[must_use]
pub fn in_live_set(record: &MatchRecord, live_ids: &LiveIdSet) -> bool {
    record.id_key().is_some_and(|k| live_ids.contains(&k))
}

/// Any one signal is enough: the record's own flag, a "live" status, or
/// membership in the live listing.
#[must_use]
pub fn is_live(record: &MatchRecord, live_ids: &LiveIdSet) -> bool {
    record.is_live
        || record
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("live"))
        || in_live_set(record, live_ids)
}

/// Folds every liveness signal into the `is_live` flag.
#[must_use]
pub fn annotate_live(records: Vec<MatchRecord>, live_ids: &LiveIdSet) -> Vec<MatchRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.is_live = is_live(&record, live_ids);
            record
        })
        .collect()
}

#[must_use]
pub fn football_only(records: &[MatchRecord]) -> Vec<&MatchRecord> {
    records.iter().filter(|r| is_football(r)).collect()
}
