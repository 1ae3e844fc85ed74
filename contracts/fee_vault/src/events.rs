use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesPaid {
    pub payer: Address,
    pub value: i128,
    pub pool_share: i128,
    pub beneficiary_share: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDeposited {
    pub payer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryUpdated {
    pub previous_beneficiary: Address,
    pub new_beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultUnlocked {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharePaid {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDistributed {
    pub total_distributed: i128,
    pub participant_count: u32,
}

pub fn emit_fees_paid(
    env: &Env,
    payer: Address,
    value: i128,
    pool_share: i128,
    beneficiary_share: i128,
) {
    let topics = (symbol_short!("fees_paid"), payer.clone());
    let data = FeesPaid {
        payer,
        value,
        pool_share,
        beneficiary_share,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_deposited(env: &Env, payer: Address, amount: i128) {
    let topics = (symbol_short!("deposit"), payer.clone());
    let data = FundsDeposited { payer, amount };
    env.events().publish(topics, data);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (symbol_short!("owner_set"),);
    let data = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    env.events().publish(topics, data);
}

pub fn emit_beneficiary_updated(env: &Env, previous_beneficiary: Address, new_beneficiary: Address) {
    let topics = (symbol_short!("benef_set"),);
    let data = BeneficiaryUpdated {
        previous_beneficiary,
        new_beneficiary,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, owner: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"),);
    let data = Withdrawn { owner, amount };
    env.events().publish(topics, data);
}

pub fn emit_vault_unlocked(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("unlocked"),);
    let data = VaultUnlocked { recipient, amount };
    env.events().publish(topics, data);
}

pub fn emit_share_paid(env: &Env, participant: Address, amount: i128) {
    let topics = (symbol_short!("payout"), participant.clone());
    let data = SharePaid {
        participant,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_distributed(env: &Env, total_distributed: i128, participant_count: u32) {
    let topics = (symbol_short!("distrib"),);
    let data = FundsDistributed {
        total_distributed,
        participant_count,
    };
    env.events().publish(topics, data);
}
