//! # Contribution Ledger
//!
//! Tracks, per participant, the pool-bound part of their fee payments and the
//! roster of distinct contributors in first-seen order.
//!
//! Only the fee splitter writes here. Deposits and direct token transfers to
//! the vault raise the pool balance without touching the ledger, so they never
//! earn a share.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::storage;
use crate::types::Participant;
use crate::Error;

/// Credit `amount` to `participant`, appending it to the roster on its first
/// contribution. A zero `amount` still registers the participant.
pub fn record_contribution(env: &Env, participant: &Address, amount: i128) {
    let mut record = storage::load_participant(env, participant);

    if !record.has_contributed {
        let mut roster = storage::load_roster(env);
        roster.push_back(participant.clone());
        storage::save_roster(env, &roster);
        record.has_contributed = true;
    }

    record.contribution = record
        .contribution
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    storage::save_participant(env, participant, &record);
}

/// Sum of all recorded contributions, recomputed over the roster on every call.
pub fn total_contributions(env: &Env) -> i128 {
    sum_contributions(env, &storage::load_roster(env))
}

pub(crate) fn sum_contributions(env: &Env, roster: &Vec<Address>) -> i128 {
    sum_claims(env, &claims(env, roster))
}

/// Each roster entry paired with its recorded contribution, in roster order.
/// One storage read per participant.
pub(crate) fn claims(env: &Env, roster: &Vec<Address>) -> Vec<(Address, i128)> {
    let mut out = Vec::new(env);
    for participant in roster.iter() {
        let record = storage::load_participant(env, &participant);
        out.push_back((participant, record.contribution));
    }
    out
}

pub(crate) fn sum_claims(env: &Env, claims: &Vec<(Address, i128)>) -> i128 {
    let mut total: i128 = 0;
    for (_, contribution) in claims.iter() {
        total = total
            .checked_add(contribution)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    }
    total
}

pub fn participant(env: &Env, address: &Address) -> Participant {
    storage::load_participant(env, address)
}

pub fn contributors(env: &Env) -> Vec<Address> {
    storage::load_roster(env)
}
