//! # Distribution Engine
//!
//! One-shot proportional payout of the whole pool once the vault has expired.
//!
//! The run is staged:
//!
//! 1. Snapshot the pool balance and the contribution total, before any transfer.
//! 2. Build the payout plan in roster order:
//!    `share = floor(total_funds * contribution / total_contributions)`.
//! 3. Execute every payout. A single refused transfer aborts the call and the
//!    host discards all payouts already made.
//! 4. Only then mark the vault as distributed.
//!
//! The truncation remainder stays in the pool. It is strictly smaller than the
//! number of contributors.
//!
//! ## Limits
//!
//! The roster is a single persistent entry and the run touches every
//! participant record in one invocation, so the whole pass must fit in one
//! transaction's read and CPU budget. A roster too large for that cannot be
//! distributed; the pool is then only recoverable through `unlock_vault`.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::types::Payout;
use crate::{events, funds, ledger, storage, Error};

/// `floor(total_funds * contribution / total_contributions)`.
///
/// Multiplies before dividing. Returns `None` on overflow or a zero divisor.
pub fn pro_rata_share(total_funds: i128, contribution: i128, total_contributions: i128) -> Option<i128> {
    total_funds
        .checked_mul(contribution)?
        .checked_div(total_contributions)
}

/// Build the payout plan for `claims` (roster order) against `total_funds`.
///
/// Participants with a zero contribution, or whose share truncates to zero,
/// get no entry.
pub fn plan(
    env: &Env,
    claims: &Vec<(Address, i128)>,
    total_funds: i128,
    total_contributions: i128,
) -> Vec<Payout> {
    let mut payouts = Vec::new(env);
    for (recipient, contribution) in claims.iter() {
        if contribution <= 0 {
            continue;
        }
        let amount = pro_rata_share(total_funds, contribution, total_contributions)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
        if amount > 0 {
            payouts.push_back(Payout { recipient, amount });
        }
    }
    payouts
}

/// Run the distribution. Preconditions are checked here so that every failure
/// happens before the first transfer.
pub fn distribute(env: &Env) -> i128 {
    if env.ledger().timestamp() < storage::get_expiration(env) {
        panic_with_error!(env, Error::VaultNotExpired);
    }
    if storage::is_distributed(env) {
        panic_with_error!(env, Error::AlreadyDistributed);
    }

    let roster = ledger::contributors(env);
    if roster.is_empty() {
        panic_with_error!(env, Error::NoContributors);
    }
    let claims = ledger::claims(env, &roster);
    let total_contributions = ledger::sum_claims(env, &claims);
    if total_contributions <= 0 {
        panic_with_error!(env, Error::NoContributions);
    }

    let total_funds = funds::pool_balance(env);
    let payouts = plan(env, &claims, total_funds, total_contributions);

    let mut total_distributed: i128 = 0;
    for payout in payouts.iter() {
        funds::send(env, &payout.recipient, payout.amount);
        events::emit_share_paid(env, payout.recipient.clone(), payout.amount);
        total_distributed += payout.amount;
    }

    storage::set_distributed(env);
    events::emit_funds_distributed(env, total_distributed, roster.len());
    total_distributed
}
