//! # Storage
//!
//! Provides typed helpers over the two Soroban storage tiers used by the vault.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type      | Description                              |
//! |---------------|-----------|------------------------------------------|
//! | `Token`       | `Address` | SEP-41 token the vault accounts in       |
//! | `Expiration`  | `u64`     | Fixed expiration timestamp               |
//! | `Distributed` | `bool`    | One-shot distribution flag               |
//! | `Locked`      | `bool`    | Reentrancy flag, present only while held |
//!
//! Owner and beneficiary live next to these under [`crate::ownership`]'s keys.
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                 | Type           | Description                       |
//! |---------------------|----------------|-----------------------------------|
//! | `Participant(addr)` | `Participant`  | Contribution record of `addr`     |
//! | `Roster`            | `Vec<Address>` | Contributors in first-seen order  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::types::Participant;
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token contract address (Instance).
    Token,
    /// Expiration timestamp (Instance).
    Expiration,
    /// One-shot distribution flag (Instance).
    Distributed,
    /// Reentrancy flag (Instance).
    Locked,
    /// Contribution record keyed by participant (Persistent).
    Participant(Address),
    /// Ordered contributor roster (Persistent).
    Roster,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Read the vault token. Panics with `Error::NotInitialized` before `init`.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Written once by `init`; there is no setter path after that.
pub fn set_expiration(env: &Env, expiration: u64) {
    env.storage().instance().set(&DataKey::Expiration, &expiration);
}

pub fn get_expiration(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Expiration)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn is_distributed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Distributed)
        .unwrap_or(false)
}

pub fn set_distributed(env: &Env) {
    env.storage().instance().set(&DataKey::Distributed, &true);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &true);
}

pub fn clear_locked(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Load the contribution record of `participant`, or an empty record if the
/// address never paid fees.
pub fn load_participant(env: &Env, participant: &Address) -> Participant {
    let key = DataKey::Participant(participant.clone());
    match env.storage().persistent().get::<_, Participant>(&key) {
        Some(record) => {
            bump_persistent(env, &key);
            record
        }
        None => Participant::default(),
    }
}

pub fn save_participant(env: &Env, participant: &Address, record: &Participant) {
    let key = DataKey::Participant(participant.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load the contributor roster (empty before the first fee payment).
///
/// Held as one entry, so its size is bounded by the ledger entry size limit.
pub fn load_roster(env: &Env) -> Vec<Address> {
    let key = DataKey::Roster;
    match env.storage().persistent().get::<_, Vec<Address>>(&key) {
        Some(roster) => {
            bump_persistent(env, &key);
            roster
        }
        None => Vec::new(env),
    }
}

pub fn save_roster(env: &Env, roster: &Vec<Address>) {
    let key = DataKey::Roster;
    env.storage().persistent().set(&key, roster);
    bump_persistent(env, &key);
}
