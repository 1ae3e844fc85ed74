//! # Ownership
//!
//! Single-owner access control plus the fee beneficiary identity.
//!
//! ## Storage layout
//!
//! - `OwnershipKey::Owner`       → `Address` — the one and only owner.
//! - `OwnershipKey::Beneficiary` → `Address` — recipient of every fee split.
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger               |
//! |--------------------|-----------------------|
//! | `owner_set`        | Ownership transferred |
//! | `benef_set`        | Beneficiary replaced  |
//!
//! ## Threat model notes
//!
//! - There is no role hierarchy; the owner is the only privileged identity.
//! - The vault's own address is the "null" identity: handing ownership or the
//!   beneficiary slot to it would lock control or strand fees inside the pool,
//!   so it is rejected with `Error::InvalidAddress`.

use soroban_sdk::{contracttype, Address, Env};

use crate::{events, storage, Error};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnershipKey {
    Owner,
    Beneficiary,
}

// ─────────────────────────────────────────────────────────
// Storage helpers
// ─────────────────────────────────────────────────────────

pub fn get_owner(env: &Env) -> Address {
    storage::bump_instance(env);
    env.storage()
        .instance()
        .get(&OwnershipKey::Owner)
        .unwrap_or_else(|| panic_with_error_ownership(env, Error::NotInitialized))
}

pub fn get_beneficiary(env: &Env) -> Address {
    storage::bump_instance(env);
    env.storage()
        .instance()
        .get(&OwnershipKey::Beneficiary)
        .unwrap_or_else(|| panic_with_error_ownership(env, Error::NotInitialized))
}

fn store_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnershipKey::Owner, owner);
}

fn store_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage()
        .instance()
        .set(&OwnershipKey::Beneficiary, beneficiary);
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the initial owner and beneficiary. Called once from `init`.
pub fn init(env: &Env, owner: &Address, beneficiary: &Address) {
    require_not_null(env, owner);
    require_not_null(env, beneficiary);
    store_owner(env, owner);
    store_beneficiary(env, beneficiary);
}

// ─────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────

/// Hand ownership to `new_owner`.
///
/// - `caller` must be the current owner.
/// - The previous owner loses every privilege immediately.
///
/// Emits an `owner_set` event.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) {
    require_owner(env, caller);
    require_not_null(env, new_owner);

    let previous = get_owner(env);
    store_owner(env, new_owner);
    events::emit_ownership_transferred(env, previous, new_owner.clone());
}

/// Replace the beneficiary of future fee payments.
///
/// Already forwarded fees are unaffected. Emits a `benef_set` event.
pub fn update_beneficiary(env: &Env, caller: &Address, new_beneficiary: &Address) {
    require_owner(env, caller);
    require_not_null(env, new_beneficiary);

    let previous = get_beneficiary(env);
    store_beneficiary(env, new_beneficiary);
    events::emit_beneficiary_updated(env, previous, new_beneficiary.clone());
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `address` is the owner.
/// Panics with `Error::NotOwner` on failure.
pub fn require_owner(env: &Env, address: &Address) {
    if *address != get_owner(env) {
        panic_with_error_ownership(env, Error::NotOwner);
    }
}

/// Reject the vault's own address wherever an external identity is expected.
pub fn require_not_null(env: &Env, address: &Address) {
    if *address == env.current_contract_address() {
        panic_with_error_ownership(env, Error::InvalidAddress);
    }
}

#[inline(always)]
fn panic_with_error_ownership(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
