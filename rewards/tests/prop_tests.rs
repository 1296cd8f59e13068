use proptest::prelude::*;

use ur_nullables::{fixtures, NullChain};
use ur_rewards::{
    is_signup_transaction, signup_chain, PrivilegedRegistry, ReductionSchedule, RewardTable,
    MAX_REFERRAL_DEPTH,
};
use ur_types::{ur_to_wei, Address, Transaction, TxHash, Wei};

/// The factors the schedule can produce.
const FACTORS: [u32; 12] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5, 0];

fn privileged() -> Address {
    Address::from_hex("0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d").unwrap()
}

/// Build a referral chain of `len` members, one signup per block, and return
/// the transaction whose payload anchors the whole chain.
fn chain_of(len: usize) -> (NullChain, Transaction) {
    let mut chain = NullChain::new();
    let mut prev: Option<Transaction> = None;
    for i in 0..len {
        let data = match &prev {
            None => fixtures::signup_root_data(),
            Some(p) => fixtures::signup_descendant_data(i as u64, &p.hash),
        };
        let tx = fixtures::signup_tx(privileged(), Address::new([i as u8 + 1; 20]), data, i as u8);
        let header = fixtures::header(i as u64 + 1, Address::ZERO);
        chain.insert(ur_types::Block {
            header,
            transactions: vec![tx.clone()],
            uncles: vec![],
        });
        prev = Some(tx);
    }
    let anchor = match prev {
        None => fixtures::signup_tx(privileged(), Address::new([99; 20]), fixtures::signup_root_data(), 99),
        Some(p) => fixtures::signup_tx(
            privileged(),
            Address::new([99; 20]),
            fixtures::signup_descendant_data(len as u64, &p.hash),
            99,
        ),
    };
    (chain, anchor)
}

proptest! {
    /// The resolved referral chain never exceeds seven members, whatever the
    /// on-chain ancestry length.
    #[test]
    fn chain_is_bounded(len in 0usize..20) {
        let (chain, anchor) = chain_of(len);
        let resolved = signup_chain(&chain, &anchor).unwrap();
        prop_assert!(resolved.len() <= MAX_REFERRAL_DEPTH);
        prop_assert_eq!(resolved.len(), len.min(MAX_REFERRAL_DEPTH));
    }

    /// Chain order: the nearest referrer comes first.
    #[test]
    fn chain_is_nearest_first(len in 1usize..10) {
        let (chain, anchor) = chain_of(len);
        let resolved = signup_chain(&chain, &anchor).unwrap();
        prop_assert_eq!(resolved[0], Address::new([len as u8; 20]));
        for (k, addr) in resolved.iter().enumerate() {
            prop_assert_eq!(*addr, Address::new([(len - k) as u8; 20]));
        }
    }

    /// The reduction factor never increases as the signup count grows.
    #[test]
    fn factor_is_monotone(n1 in 0u64..300_000_000, delta in 0u64..300_000_000) {
        let schedule = ReductionSchedule::standard();
        let n2 = n1.saturating_add(delta);
        prop_assert!(schedule.factor(n1) >= schedule.factor(n2));
    }

    /// Scaling preserves the factor ordering for any amount.
    #[test]
    fn scaling_is_monotone_in_the_factor(v in 0u128..u128::MAX, i in 0usize..12, j in 0usize..12) {
        let (hi, lo) = (FACTORS[i.min(j)], FACTORS[i.max(j)]);
        let amount = Wei::from_u128(v);
        prop_assert!(amount.scale(hi) >= amount.scale(lo));
    }

    /// Each of the seven member amounts truncates at most 1 wei when scaled,
    /// so the summed profile total sits within 7 wei below the scaled grand
    /// total and never above it.
    #[test]
    fn scale_then_sum_diverges_by_at_most_seven_wei(i in 0usize..12) {
        let table = RewardTable::new();
        let factor = FACTORS[i];
        let profile = table.profile(factor).unwrap();
        let scaled_grand_total = ur_to_wei("2000").unwrap().scale(factor);
        prop_assert!(profile.total_signup_rewards <= scaled_grand_total);
        let gap = scaled_grand_total
            .checked_sub(&profile.total_signup_rewards)
            .unwrap();
        prop_assert!(gap <= Wei::from_u64(7));
    }

    /// Every one of the seven per-level amounts is accounted for: what the
    /// referrers receive plus the receiver's residual equals the profile
    /// total, for any chain length.
    #[test]
    fn residual_loses_nothing(len in 0usize..=7, i in 0usize..12) {
        let table = RewardTable::new();
        let profile = table.profile(FACTORS[i]).unwrap();
        let mut distributed = Wei::zero();
        for amount in &profile.members_signup_rewards[..len] {
            distributed += amount;
        }
        let mut residual = Wei::zero();
        for amount in &profile.members_signup_rewards[len..] {
            residual += amount;
        }
        prop_assert_eq!(distributed + residual, profile.total_signup_rewards.clone());
    }

    /// Classifier exactness: the decision is precisely the three-way
    /// conjunction, for arbitrary senders, values and payloads.
    #[test]
    fn classifier_matches_its_definition(
        use_privileged in any::<bool>(),
        value in 0u64..4,
        data in proptest::collection::vec(any::<u8>(), 0..50),
    ) {
        let registry = PrivilegedRegistry::new();
        let from = if use_privileged { privileged() } else { Address::new([0x77; 20]) };
        let tx = Transaction {
            from,
            to: Address::new([0x88; 20]),
            value: Wei::from_u64(value),
            data: data.clone(),
            hash: TxHash::ZERO,
        };
        let expected = registry.is_privileged(&from)
            && value == 1
            && !data.is_empty()
            && data[0] == 1;
        prop_assert_eq!(is_signup_transaction(&registry, &tx), expected);
    }
}
