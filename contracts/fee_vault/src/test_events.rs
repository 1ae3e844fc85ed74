extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, Symbol, TryIntoVal,
};

use crate::events::{
    BeneficiaryUpdated, FeesPaid, FundsDeposited, FundsDistributed, OwnershipTransferred,
    SharePaid, VaultUnlocked, Withdrawn,
};
use crate::{FeeVault, FeeVaultClient};

fn setup() -> (Env, FeeVaultClient<'static>, token::Client<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(FeeVault, ());
    let client = FeeVaultClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let token = create_token(&env, &Address::generate(&env));
    client.init(&owner, &token.address, &Address::generate(&env), &1_000);
    (env, client, token, owner)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn funded(env: &Env, token: &token::Client, amount: i128) -> Address {
    let who = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&who, &amount);
    who
}

#[test]
fn test_fees_paid_event() {
    let (env, client, token, _owner) = setup();
    let payer = funded(&env, &token, 100);

    client.pay_fees(&payer, &100);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("fees_paid"), payer)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("fees_paid").into_val(&env), payer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FeesPaid = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FeesPaid {
        payer: payer.clone(),
        value: 100,
        pool_share: 70,
        beneficiary_share: 30,
    });
}

#[test]
fn test_funds_deposited_event() {
    let (env, client, token, _owner) = setup();
    let donor = funded(&env, &token, 25);

    client.deposit_funds(&donor, &25);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("deposit").into_val(&env), donor.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsDeposited = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsDeposited { payer: donor.clone(), amount: 25 });
}

#[test]
fn test_ownership_and_beneficiary_events() {
    let (env, client, _token, owner) = setup();
    let new_owner = Address::generate(&env);
    let old_beneficiary = client.get_beneficiary();
    let new_beneficiary = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![&env, symbol_short!("owner_set").into_val(&env)]);
    let event_data: OwnershipTransferred = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, OwnershipTransferred {
        previous_owner: owner.clone(),
        new_owner: new_owner.clone(),
    });

    client.update_beneficiary(&new_owner, &new_beneficiary);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![&env, symbol_short!("benef_set").into_val(&env)]);
    let event_data: BeneficiaryUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, BeneficiaryUpdated {
        previous_beneficiary: old_beneficiary,
        new_beneficiary,
    });
}

#[test]
fn test_withdraw_and_unlock_events() {
    let (env, client, token, owner) = setup();
    let donor = funded(&env, &token, 50);
    client.deposit_funds(&donor, &50);

    client.withdraw(&owner, &20);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![&env, symbol_short!("withdraw").into_val(&env)]);
    let event_data: Withdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, Withdrawn { owner: owner.clone(), amount: 20 });

    let recipient = Address::generate(&env);
    client.unlock_vault(&owner, &recipient);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![&env, symbol_short!("unlocked").into_val(&env)]);
    let event_data: VaultUnlocked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, VaultUnlocked { recipient, amount: 30 });
}

#[test]
fn test_distribution_events_follow_roster_order() {
    let (env, client, token, _owner) = setup();
    let p1 = funded(&env, &token, 100);
    let p2 = funded(&env, &token, 50);
    let p3 = funded(&env, &token, 10);
    client.pay_fees(&p2, &50);
    client.pay_fees(&p1, &100);
    client.pay_fees(&p3, &10);
    env.ledger().set_timestamp(1_000);

    client.distribute_funds();

    let all_events = env.events().all();
    let payout_topic = symbol_short!("payout");
    let mut payouts = std::vec::Vec::new();
    for event in all_events.iter() {
        if event.0 != client.address {
            continue;
        }
        let topic: Symbol = event.1.get(0).unwrap().try_into_val(&env).unwrap();
        if topic == payout_topic {
            let data: SharePaid = event.2.try_into_val(&env).unwrap();
            payouts.push(data);
        }
    }
    assert_eq!(payouts, std::vec![
        SharePaid { participant: p2.clone(), amount: 35 },
        SharePaid { participant: p1.clone(), amount: 70 },
        SharePaid { participant: p3.clone(), amount: 7 },
    ]);

    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.1, vec![&env, symbol_short!("distrib").into_val(&env)]);
    let event_data: FundsDistributed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsDistributed {
        total_distributed: 112,
        participant_count: 3,
    });
}
