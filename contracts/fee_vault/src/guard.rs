//! Non-reentrant section held for the extent of every state-mutating entry point.
//!
//! The flag lives in instance storage so that a nested invocation of the vault
//! (for example from a token hook during a payout) observes it. It is cleared
//! when the guard is dropped on the success path; on failure the host rolls the
//! write back together with everything else the call did.

use soroban_sdk::{panic_with_error, Env};

use crate::{storage, Error};

pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    /// Acquire the guard. Panics with `Error::Reentrancy` if it is already held.
    pub fn enter(env: &Env) -> Self {
        if storage::is_locked(env) {
            panic_with_error!(env, Error::Reentrancy);
        }
        storage::set_locked(env);
        ReentrancyGuard { env: env.clone() }
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        storage::clear_locked(&self.env);
    }
}
