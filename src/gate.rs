//! Batch evaluation: decide one execute-batch request against the selector allow-list.
//!
//! Evaluation is a pure function of the allow-list snapshot and the raw payload bytes. It has one
//! observable outcome, a boolean, and it fails closed: a payload this gate cannot positively
//! recognise as an execute batch of allow-listed calls is not permitted.

use alloy_sol_types::SolCall;

use stylus_sdk::alloy_primitives::FixedBytes;

use crate::{decoder::decode_execute_call, interfaces::IExecutor, utils::bytes::selector_of};

/// Membership view of the selector allow-list.
pub trait SelectorRegistry {
    fn is_allowed(&self, selector: FixedBytes<4>) -> bool;
}

/// Evaluate a raw call payload against the registry.
///
/// Permitted iff the payload is an `IExecutor.execute` call whose every action invokes an
/// allow-listed selector. An action whose `data` carries no selector (shorter than 4 bytes) is
/// denied; an empty batch is vacuously permitted. Never panics, for any input bytes.
pub fn evaluate_calldata<R: SelectorRegistry>(registry: &R, payload: &[u8]) -> bool {
    // Only execute-batch calls are in this gate's jurisdiction; deny every other call shape.
    match selector_of(payload) {
        Some(outer) if outer.0 == IExecutor::executeCall::SELECTOR => {}
        _ => return false,
    }

    let batch = match decode_execute_call(&payload[4..]) {
        Ok(batch) => batch,
        Err(_) => return false,
    };

    for action in &batch.actions {
        let selector = match selector_of(&action.data) {
            Some(selector) => selector,
            None => return false,
        };
        if !registry.is_allowed(selector) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::Action;
    use alloc::collections::BTreeSet;
    use alloy_primitives::{address, b256, Address, Bytes, U256};

    struct StubRegistry(BTreeSet<[u8; 4]>);

    impl StubRegistry {
        fn of(selectors: &[[u8; 4]]) -> Self {
            Self(selectors.iter().copied().collect())
        }
    }

    impl SelectorRegistry for StubRegistry {
        fn is_allowed(&self, selector: FixedBytes<4>) -> bool {
            self.0.contains(&selector.0)
        }
    }

    fn action(data: &[u8]) -> Action {
        Action {
            to: address!("00000000000000000000000000000000000000aa"),
            value: U256::ZERO,
            data: Bytes::copy_from_slice(data),
        }
    }

    fn execute_calldata(actions: Vec<Action>) -> Vec<u8> {
        IExecutor::executeCall {
            proposalId: b256!("0000000000000000000000000000000000000000000000000000000000000001"),
            actions,
            allowFailureMap: U256::ZERO,
        }
        .abi_encode()
    }

    #[test]
    fn empty_batch_is_vacuously_permitted() {
        let registry = StubRegistry::of(&[]);
        assert!(evaluate_calldata(&registry, &execute_calldata(Vec::new())));
    }

    #[test]
    fn permits_when_every_action_selector_is_listed() {
        let registry = StubRegistry::of(&[[0xAA; 4], [0xBB; 4]]);
        let calldata = execute_calldata(vec![
            action(&[0xAA, 0xAA, 0xAA, 0xAA, 0x01, 0x02]),
            action(&[0xBB, 0xBB, 0xBB, 0xBB]),
        ]);
        assert!(evaluate_calldata(&registry, &calldata));
    }

    #[test]
    fn one_unlisted_action_denies_the_whole_batch() {
        let registry = StubRegistry::of(&[[0xAA; 4], [0xBB; 4]]);
        let calldata = execute_calldata(vec![
            action(&[0xAA; 4]),
            action(&[0xBB; 4]),
            action(&[0xCC, 0xCC, 0xCC, 0xCC, 0xFF]),
        ]);
        assert!(!evaluate_calldata(&registry, &calldata));
    }

    #[test]
    fn denial_is_position_independent() {
        let registry = StubRegistry::of(&[[0xAA; 4]]);
        let n = 5;
        for bad in [0usize, 2, n - 1] {
            let actions = (0..n)
                .map(|i| {
                    if i == bad {
                        action(&[0xCC; 4])
                    } else {
                        action(&[0xAA; 4])
                    }
                })
                .collect();
            assert!(!evaluate_calldata(&registry, &execute_calldata(actions)));
        }
    }

    #[test]
    fn action_data_without_a_selector_is_denied() {
        // Never matches, not even a listed zero selector.
        let registry = StubRegistry::of(&[[0x00; 4], [0xAA; 4]]);
        assert!(!evaluate_calldata(
            &registry,
            &execute_calldata(vec![action(&[])])
        ));
        assert!(!evaluate_calldata(
            &registry,
            &execute_calldata(vec![action(&[0x00, 0x00, 0x00])])
        ));
    }

    #[test]
    fn foreign_outer_selectors_are_out_of_jurisdiction() {
        let registry = StubRegistry::of(&[[0xAA; 4]]);
        let mut calldata = execute_calldata(vec![action(&[0xAA; 4])]);
        // Same well-formed body, different outer selector: denied without decoding.
        calldata[..4].copy_from_slice(&hex::decode("deadbeef").unwrap());
        assert!(!evaluate_calldata(&registry, &calldata));
    }

    #[test]
    fn short_and_empty_payloads_are_denied() {
        let registry = StubRegistry::of(&[[0xAA; 4]]);
        assert!(!evaluate_calldata(&registry, &[]));
        assert!(!evaluate_calldata(&registry, &IExecutor::executeCall::SELECTOR[..3]));
    }

    #[test]
    fn malformed_bodies_fail_closed() {
        let registry = StubRegistry::of(&[[0xAA; 4]]);
        // Word-aligned action data, so every truncation below breaks the encoding itself.
        let calldata = execute_calldata(vec![action(&[0xAA; 32])]);
        // Correct outer selector, truncated tuple encoding at every cut point.
        for cut in 4..calldata.len() {
            assert!(!evaluate_calldata(&registry, &calldata[..cut]));
        }
    }

    #[test]
    fn targets_and_values_do_not_matter() {
        let registry = StubRegistry::of(&[[0xAA; 4]]);
        let calldata = execute_calldata(vec![Action {
            to: Address::ZERO,
            value: U256::MAX,
            data: Bytes::copy_from_slice(&[0xAA; 4]),
        }]);
        assert!(evaluate_calldata(&registry, &calldata));
    }
}
