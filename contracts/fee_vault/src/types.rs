//! # Types
//!
//! Shared data structures used across all modules of the fee vault.
//!
//! ## Vault status as a finite-state machine
//!
//! [`VaultStatus`] is derived from the clock and the one-shot distribution
//! flag; it is never stored directly:
//!
//! ```text
//! Open ──► ExpiredPending ──► Distributed
//! ```
//!
//! `pay_fees` is only accepted while `Open`. `distribute_funds` is only
//! accepted while `ExpiredPending` and moves the vault to `Distributed`
//! atomically with its success. Administrative fund movements are accepted in
//! every state.

use soroban_sdk::{contracttype, Address};

/// Distribution readiness of the vault.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VaultStatus {
    /// Before expiration; fee payments accepted.
    Open,
    /// Expiration reached, distribution not yet run.
    ExpiredPending,
    /// Distribution succeeded. Terminal for `distribute_funds` only.
    Distributed,
}

/// Per-address contribution record.
///
/// Created lazily on the first successful fee payment from an address and
/// only ever increased afterwards.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    /// `true` once the address has been appended to the roster.
    pub has_contributed: bool,
    /// Sum of pool shares credited to this address, in token base units.
    pub contribution: i128,
}

/// One pending transfer of a staged distribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: i128,
}

/// Read-only snapshot returned by `get_vault`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInfo {
    pub owner: Address,
    pub beneficiary: Address,
    /// SEP-41 token the vault accounts in.
    pub token: Address,
    /// Ledger timestamp from which fee payments stop and distribution opens.
    pub expiration: u64,
    pub status: VaultStatus,
    /// Current pool balance held by the vault.
    pub balance: i128,
    pub total_contributions: i128,
    pub contributor_count: u32,
}
