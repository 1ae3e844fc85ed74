//! Token movements between the vault and the outside world.
//!
//! Every transfer goes through the `try_` form of the SEP-41 client so that a
//! refusing recipient (frozen trustline, deauthorized balance, failing token)
//! surfaces as `Error::TransferFailed` rather than an opaque host error. The
//! failed call then aborts, rolling back everything done before it.

use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::{storage, Error};

fn client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

/// Current pool balance held by the vault.
pub fn pool_balance(env: &Env) -> i128 {
    client(env).balance(&env.current_contract_address())
}

/// Move `amount` from `from` into the vault. `from` must have authorised.
pub fn pull(env: &Env, from: &Address, amount: i128) {
    let vault = env.current_contract_address();
    match client(env).try_transfer(from, &vault, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "inbound transfer rejected", from.clone(), amount);
            panic_with_error!(env, Error::TransferFailed);
        }
    }
}

/// Pay `amount` out of the vault to `to`.
pub fn send(env: &Env, to: &Address, amount: i128) {
    let vault = env.current_contract_address();
    match client(env).try_transfer(&vault, to, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "outbound transfer rejected", to.clone(), amount);
            panic_with_error!(env, Error::TransferFailed);
        }
    }
}
