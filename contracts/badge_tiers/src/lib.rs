#![no_std]

//! # Badge Tiers Contract
//!
//! Maps amount thresholds to badge image identifiers and answers "which
//! badge applies to amount X" with the nearest tier at or below X. Tier
//! scales are partitioned by an opaque payload key so several independent
//! scales coexist; callers that supply no payload address the default
//! (all-zero) scale. Only the admin can set or remove tiers.

use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, String, Symbol, Vec};

pub mod tiers;

use tiers::TierRecord;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Tier records of one payload scale, ascending by threshold.
    Tiers(BytesN<32>),
}

#[contract]
pub struct BadgeTiers;

/// Admin capability check. Called before every mutating entry point; the
/// ordering core itself never sees caller identity.
fn require_admin(e: &Env) {
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("not initialized");
    admin.require_auth();
}

fn resolve_payload(e: &Env, payload: Option<BytesN<32>>) -> BytesN<32> {
    payload.unwrap_or_else(|| tiers::default_payload(e))
}

fn load_tiers(e: &Env, payload: &BytesN<32>) -> Vec<TierRecord> {
    e.storage()
        .instance()
        .get(&DataKey::Tiers(payload.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

#[contractimpl]
impl BadgeTiers {
    /// Initialize the contract with an admin address. Only the admin can
    /// set and remove tiers.
    pub fn initialize(e: Env, admin: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Create or replace the tier at `threshold` within a payload scale.
    /// Setting an existing threshold overwrites its image.
    pub fn set_tier(e: Env, payload: Option<BytesN<32>>, threshold: i128, image: String) {
        require_admin(&e);

        if threshold < 0 {
            panic!("threshold must be non-negative");
        }
        if image.len() == 0 {
            panic!("image must not be empty");
        }

        let payload = resolve_payload(&e, payload);
        let mut records = load_tiers(&e, &payload);
        tiers::upsert(
            &mut records,
            TierRecord {
                threshold,
                image: image.clone(),
            },
        );
        e.storage()
            .instance()
            .set(&DataKey::Tiers(payload.clone()), &records);

        e.events()
            .publish((Symbol::new(&e, "tier_set"), payload, threshold), image);
    }

    /// Remove the tier at `threshold`. Removing a threshold that was never
    /// set is a no-op, so removals can be retried safely.
    pub fn remove_tier(e: Env, payload: Option<BytesN<32>>, threshold: i128) {
        require_admin(&e);

        let payload = resolve_payload(&e, payload);
        let key = DataKey::Tiers(payload.clone());
        let mut records: Vec<TierRecord> = match e.storage().instance().get(&key) {
            Some(records) => records,
            None => return,
        };

        if !tiers::remove(&mut records, threshold) {
            return;
        }

        // An empty scale and a never-written one answer queries identically.
        if records.is_empty() {
            e.storage().instance().remove(&key);
        } else {
            e.storage().instance().set(&key, &records);
        }

        e.events()
            .publish((Symbol::new(&e, "tier_removed"), payload, threshold), ());
    }

    /// The badge image for `amount`: the image of the tier with the
    /// greatest threshold at or below it. Returns the empty string when no
    /// tier qualifies.
    pub fn image(e: Env, payload: Option<BytesN<32>>, amount: i128) -> String {
        let payload = resolve_payload(&e, payload);
        let records = load_tiers(&e, &payload);
        match tiers::floor(&records, amount) {
            Some(record) => record.image,
            None => String::from_str(&e, ""),
        }
    }

    /// Exact read of the tier at `threshold`.
    pub fn get_tier(e: Env, payload: Option<BytesN<32>>, threshold: i128) -> TierRecord {
        let payload = resolve_payload(&e, payload);
        let records = load_tiers(&e, &payload);
        tiers::find(&records, threshold).unwrap_or_else(|| panic!("tier not found"))
    }

    /// Whether a tier exists at exactly `threshold`.
    pub fn has_tier(e: Env, payload: Option<BytesN<32>>, threshold: i128) -> bool {
        let payload = resolve_payload(&e, payload);
        let records = load_tiers(&e, &payload);
        tiers::find(&records, threshold).is_some()
    }

    /// All tiers of a payload scale in ascending threshold order.
    pub fn get_tiers(e: Env, payload: Option<BytesN<32>>) -> Vec<TierRecord> {
        let payload = resolve_payload(&e, payload);
        load_tiers(&e, &payload)
    }

    /// The payload key used when a caller supplies none.
    pub fn default_payload(e: Env) -> BytesN<32> {
        tiers::default_payload(&e)
    }
}
