//! Tier ordering core.
//!
//! Keeps the tier records of one payload scale in a sequence sorted by
//! ascending threshold, with at most one record per threshold, and resolves
//! an amount to the tier with the greatest threshold at or below it.
//! Pure sequence manipulation; authorization and storage live in the
//! contract layer.

use soroban_sdk::{contracttype, BytesN, Env, String, Vec};

/// A single tier: the lower bound of the amount range it covers, and the
/// badge image identifier served for that range.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierRecord {
    pub threshold: i128,
    pub image: String,
}

/// The payload key used when a caller supplies none: all zero bytes.
pub fn default_payload(e: &Env) -> BytesN<32> {
    BytesN::from_array(e, &[0u8; 32])
}

/// Index of the first record with a threshold >= `threshold`, or `len()`
/// when every record is below it.
fn partition_point(records: &Vec<TierRecord>, threshold: i128) -> u32 {
    let mut lo = 0u32;
    let mut hi = records.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if records.get_unchecked(mid).threshold < threshold {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Insert `record` keeping ascending threshold order, or replace the image
/// of the existing record at the same threshold. Returns true on replace.
pub fn upsert(records: &mut Vec<TierRecord>, record: TierRecord) -> bool {
    let at = partition_point(records, record.threshold);
    if at < records.len() && records.get_unchecked(at).threshold == record.threshold {
        records.set(at, record);
        true
    } else {
        records.insert(at, record);
        false
    }
}

/// Delete the record at exactly `threshold`. Returns false when no such
/// record exists; remaining records keep their order either way.
pub fn remove(records: &mut Vec<TierRecord>, threshold: i128) -> bool {
    let at = partition_point(records, threshold);
    if at < records.len() && records.get_unchecked(at).threshold == threshold {
        records.remove(at);
        true
    } else {
        false
    }
}

/// Exact-match lookup at `threshold`.
pub fn find(records: &Vec<TierRecord>, threshold: i128) -> Option<TierRecord> {
    let at = partition_point(records, threshold);
    if at < records.len() {
        let record = records.get_unchecked(at);
        if record.threshold == threshold {
            return Some(record);
        }
    }
    None
}

/// The record with the greatest threshold <= `amount`, or None when the
/// sequence is empty or every threshold exceeds `amount`.
pub fn floor(records: &Vec<TierRecord>, amount: i128) -> Option<TierRecord> {
    let at = partition_point(records, amount);
    if at < records.len() {
        let record = records.get_unchecked(at);
        if record.threshold == amount {
            return Some(record);
        }
    }
    if at == 0 {
        None
    } else {
        Some(records.get_unchecked(at - 1))
    }
}
