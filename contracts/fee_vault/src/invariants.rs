#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

use crate::fees::{PERCENT_DENOMINATOR, POOL_SHARE_PERCENT};
use crate::types::VaultStatus;

/// INV-1: A fee split is exact: the two shares sum to the paid value and the
/// pool share is the truncated 70%.
pub fn assert_fee_split(value: i128, pool_share: i128, beneficiary_share: i128) {
    assert_eq!(
        pool_share + beneficiary_share,
        value,
        "INV-1 violated: {} + {} != {}",
        pool_share,
        beneficiary_share,
        value
    );
    assert_eq!(
        pool_share,
        value * POOL_SHARE_PERCENT / PERCENT_DENOMINATOR,
        "INV-1 violated: pool share {} is not floor(70% of {})",
        pool_share,
        value
    );
}

/// INV-2: The roster holds each contributor exactly once.
pub fn assert_roster_unique(roster: &Vec<Address>) {
    for i in 0..roster.len() {
        let a = roster.get(i).unwrap();
        for j in (i + 1)..roster.len() {
            assert!(
                a != roster.get(j).unwrap(),
                "INV-2 violated: roster entry {} repeated at {}",
                i,
                j
            );
        }
    }
}

/// INV-3: Contributions never decrease.
pub fn assert_contribution_monotonic(before: i128, after: i128) {
    assert!(
        after >= before,
        "INV-3 violated: contribution dropped from {} to {}",
        before,
        after
    );
}

/// INV-4: A distribution never pays out more than the snapshot balance, and
/// the truncation remainder is strictly smaller than the number of paid
/// contributors.
pub fn assert_distribution_bounds(balance_before: i128, total_distributed: i128, contributors: u32) {
    let remainder = balance_before - total_distributed;
    assert!(
        remainder >= 0,
        "INV-4 violated: distributed {} out of a {} balance",
        total_distributed,
        balance_before
    );
    assert!(
        remainder < contributors as i128,
        "INV-4 violated: remainder {} not below contributor count {}",
        remainder,
        contributors
    );
}

/// INV-5: Status only moves forward, one step at a time:
///   Open -> ExpiredPending -> Distributed
pub fn assert_valid_status_transition(from: &VaultStatus, to: &VaultStatus) {
    let valid = matches!(
        (from, to),
        (VaultStatus::Open, VaultStatus::Open)
            | (VaultStatus::Open, VaultStatus::ExpiredPending)
            | (VaultStatus::ExpiredPending, VaultStatus::ExpiredPending)
            | (VaultStatus::ExpiredPending, VaultStatus::Distributed)
            | (VaultStatus::Distributed, VaultStatus::Distributed)
    );

    assert!(
        valid,
        "INV-5 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}
