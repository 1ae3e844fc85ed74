//! # Fee Vault Contract
//!
//! A custodial pooled-funds ledger. Every fee payment is split 70/30 between a
//! shared pool and a fixed beneficiary; each payer's pool share is recorded as
//! their claim. Once the vault expires, anyone may trigger a one-shot
//! distribution that pays the entire pool balance out to contributors in
//! proportion to their recorded contributions.
//!
//! | Phase          | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`FeeVault::init`]                                    |
//! | Owner admin    | `transfer_ownership`, `update_beneficiary`            |
//! | Funding        | `pay_fees`, `receive`, `deposit_funds`                |
//! | Emergency      | `withdraw`, `unlock_vault`                            |
//! | Payout         | [`FeeVault::distribute_funds`]                        |
//! | Queries        | `is_expired`, `status`, `get_vault`, `preview_share`, ... |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`ownership`], the reentrancy section to
//! [`guard`], contribution accounting to [`ledger`], the 70/30 split to
//! [`fees`] and the payout algorithm to [`distribution`]. This file holds the
//! public entry points and their precondition checks.
//!
//! ## Trust model
//!
//! The owner can move any amount out of the vault at any time. In particular
//! `unlock_vault` before expiration leaves contributors with nothing to
//! distribute. Participants are trusting the owner not to do that.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, Vec};

mod distribution;
pub mod events;
pub mod fees;
mod funds;
mod guard;
mod ledger;
pub mod ownership;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use guard::ReentrancyGuard;
pub use types::{Participant, Payout, VaultInfo, VaultStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidAddress = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
    EmptyVault = 7,
    VaultExpired = 8,
    VaultNotExpired = 9,
    AlreadyDistributed = 10,
    NoContributors = 11,
    NoContributions = 12,
    Reentrancy = 13,
    TransferFailed = 14,
    UnsupportedOperation = 15,
    Overflow = 16,
}

#[contract]
pub struct FeeVault;

#[contractimpl]
impl FeeVault {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the vault.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` becomes the owner and must sign the transaction.
    /// - `token` is the SEP-41 token every payment is made in.
    /// - The vault expires `duration` seconds after the current ledger time.
    pub fn init(env: Env, owner: Address, token: Address, beneficiary: Address, duration: u64) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        let expiration = env
            .ledger()
            .timestamp()
            .checked_add(duration)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        ownership::init(&env, &owner, &beneficiary);
        storage::set_token(&env, &token);
        storage::set_expiration(&env, expiration);
        storage::bump_instance(&env);
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    /// Transfer ownership to `new_owner`. `caller` must be the owner.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) {
        let _guard = ReentrancyGuard::enter(&env);
        caller.require_auth();
        ownership::transfer_ownership(&env, &caller, &new_owner);
    }

    /// Replace the fee beneficiary. `caller` must be the owner.
    pub fn update_beneficiary(env: Env, caller: Address, new_beneficiary: Address) {
        let _guard = ReentrancyGuard::enter(&env);
        caller.require_auth();
        ownership::update_beneficiary(&env, &caller, &new_beneficiary);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Pay `value` in fees. 70% stays in the pool and is credited to `payer`;
    /// the rest is forwarded to the beneficiary immediately.
    ///
    /// Only accepted before expiration.
    pub fn pay_fees(env: Env, payer: Address, value: i128) {
        let _guard = ReentrancyGuard::enter(&env);
        payer.require_auth();

        if value <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if Self::is_expired(env.clone()) {
            panic_with_error!(&env, Error::VaultExpired);
        }

        fees::collect(&env, &payer, value);
    }

    /// Plain value sent to the vault without naming an operation. Treated
    /// exactly as a fee payment.
    pub fn receive(env: Env, payer: Address, value: i128) {
        Self::pay_fees(env, payer, value)
    }

    /// Any other value-bearing request. Always rejected.
    pub fn fallback(env: Env, _caller: Address, _value: i128) {
        panic_with_error!(&env, Error::UnsupportedOperation);
    }

    /// Top up the pool without a fee split and without earning a share.
    ///
    /// Accepted in every state, including after distribution.
    pub fn deposit_funds(env: Env, payer: Address, value: i128) {
        let _guard = ReentrancyGuard::enter(&env);
        payer.require_auth();

        if value <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        funds::pull(&env, &payer, value);
        events::emit_funds_deposited(&env, payer, value);
    }

    // ─────────────────────────────────────────────────────────
    // Emergency control
    // ─────────────────────────────────────────────────────────

    /// Pay `amount` from the pool to the owner. `caller` must be the owner.
    pub fn withdraw(env: Env, caller: Address, amount: i128) {
        let _guard = ReentrancyGuard::enter(&env);
        caller.require_auth();
        ownership::require_owner(&env, &caller);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if amount > funds::pool_balance(&env) {
            panic_with_error!(&env, Error::InsufficientBalance);
        }

        funds::send(&env, &caller, amount);
        events::emit_withdrawn(&env, caller, amount);
    }

    /// Sweep the entire pool balance to `recipient`, bypassing proportional
    /// accounting. Returns the amount swept.
    ///
    /// WARNING: calling this before expiration leaves nothing for
    /// `distribute_funds`; contributors get no share.
    pub fn unlock_vault(env: Env, caller: Address, recipient: Address) -> i128 {
        let _guard = ReentrancyGuard::enter(&env);
        caller.require_auth();
        ownership::require_owner(&env, &caller);
        ownership::require_not_null(&env, &recipient);

        let balance = funds::pool_balance(&env);
        if balance <= 0 {
            panic_with_error!(&env, Error::EmptyVault);
        }

        funds::send(&env, &recipient, balance);
        events::emit_vault_unlocked(&env, recipient, balance);
        balance
    }

    // ─────────────────────────────────────────────────────────
    // Distribution
    // ─────────────────────────────────────────────────────────

    /// Pay the pool out to every contributor in proportion to their recorded
    /// contribution. Callable by anyone, once, after expiration.
    ///
    /// Returns the total amount paid out.
    pub fn distribute_funds(env: Env) -> i128 {
        let _guard = ReentrancyGuard::enter(&env);
        distribution::distribute(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// `true` once the ledger time has reached the expiration instant.
    pub fn is_expired(env: Env) -> bool {
        env.ledger().timestamp() >= storage::get_expiration(&env)
    }

    /// Lifecycle state derived from the clock and the distribution flag.
    pub fn status(env: Env) -> VaultStatus {
        if storage::is_distributed(&env) {
            VaultStatus::Distributed
        } else if Self::is_expired(env) {
            VaultStatus::ExpiredPending
        } else {
            VaultStatus::Open
        }
    }

    /// Whether the one-shot distribution has run.
    pub fn is_distributed(env: Env) -> bool {
        storage::is_distributed(&env)
    }

    /// Current owner.
    pub fn get_owner(env: Env) -> Address {
        ownership::get_owner(&env)
    }

    /// Address receiving the beneficiary share of each fee payment.
    pub fn get_beneficiary(env: Env) -> Address {
        ownership::get_beneficiary(&env)
    }

    /// Token the vault accounts in.
    pub fn get_token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Expiration timestamp, fixed at init.
    pub fn get_expiration(env: Env) -> u64 {
        storage::get_expiration(&env)
    }

    /// Current pool balance.
    pub fn get_balance(env: Env) -> i128 {
        funds::pool_balance(&env)
    }

    /// Contribution record of `participant` (default if it never paid fees).
    pub fn get_participant(env: Env, participant: Address) -> Participant {
        ledger::participant(&env, &participant)
    }

    /// Recorded contribution of `participant`.
    pub fn get_contribution(env: Env, participant: Address) -> i128 {
        ledger::participant(&env, &participant).contribution
    }

    /// Contributors in first-contribution order.
    pub fn get_contributors(env: Env) -> Vec<Address> {
        ledger::contributors(&env)
    }

    /// Sum of all recorded contributions.
    pub fn total_contributions(env: Env) -> i128 {
        ledger::total_contributions(&env)
    }

    /// What `participant` would receive if the distribution ran against the
    /// current balance. Zero once distributed or while nothing is contributed.
    pub fn preview_share(env: Env, participant: Address) -> i128 {
        if storage::is_distributed(&env) {
            return 0;
        }
        let total = ledger::total_contributions(&env);
        if total <= 0 {
            return 0;
        }
        let contribution = ledger::participant(&env, &participant).contribution;
        distribution::pro_rata_share(funds::pool_balance(&env), contribution, total)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow))
    }

    /// One-call snapshot of the vault.
    pub fn get_vault(env: Env) -> VaultInfo {
        let contributors = ledger::contributors(&env);
        VaultInfo {
            owner: ownership::get_owner(&env),
            beneficiary: ownership::get_beneficiary(&env),
            token: storage::get_token(&env),
            expiration: storage::get_expiration(&env),
            status: Self::status(env.clone()),
            balance: funds::pool_balance(&env),
            total_contributions: ledger::sum_contributions(&env, &contributors),
            contributor_count: contributors.len(),
        }
    }
}
