//! # Fee Splitter
//!
//! Every fee payment is partitioned between the pool and the beneficiary:
//!
//! ```text
//! pool_share        = floor(value * 70 / 100)
//! beneficiary_share = value - pool_share
//! ```
//!
//! The two shares always sum to `value`. Truncation only ever lowers the pool
//! share, so `beneficiary_share` is at least 1 for every positive `value`.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{events, funds, ledger, ownership, Error};

/// Percentage of each fee payment that stays in the pool.
pub const POOL_SHARE_PERCENT: i128 = 70;
pub const PERCENT_DENOMINATOR: i128 = 100;

/// Split `value` into `(pool_share, beneficiary_share)`.
///
/// Returns `None` if `value * POOL_SHARE_PERCENT` overflows.
pub fn split(value: i128) -> Option<(i128, i128)> {
    let pool_share = value.checked_mul(POOL_SHARE_PERCENT)? / PERCENT_DENOMINATOR;
    Some((pool_share, value - pool_share))
}

/// Pull `value` from `payer`, forward the beneficiary share and credit the
/// pool share to `payer`. Caller-side checks (guard, expiry, auth, amount) are
/// done by the entry point.
pub fn collect(env: &Env, payer: &Address, value: i128) {
    let (pool_share, beneficiary_share) =
        split(value).unwrap_or_else(|| panic_with_error!(env, Error::Overflow));

    funds::pull(env, payer, value);
    funds::send(env, &ownership::get_beneficiary(env), beneficiary_share);
    ledger::record_contribution(env, payer, pool_share);

    events::emit_fees_paid(env, payer.clone(), value, pool_share, beneficiary_share);
}
