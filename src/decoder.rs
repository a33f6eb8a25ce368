//! ABI decoding of the governed account's execute-batch call.
//!
//! The payload after the 4-byte selector is the tuple encoding of
//! `(bytes32 proposalId, Action[] actions, uint256 allowFailureMap)` with
//! `Action = (address to, uint256 value, bytes data)`: fixed-size head words inline, dynamic
//! fields behind byte offsets. The walk below checks every offset and length against the payload
//! before dereferencing it, so a hostile encoding can only produce a `DecodeError`, never a panic.
//!
//! Addresses are taken from the low 20 bytes of their word without rejecting dirty padding,
//! matching the Solidity decoder on the account side. Unreferenced trailing bytes are tolerated
//! for the same reason: offset encodings are not required to be canonical.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{Address, FixedBytes, U256};

use crate::{
    errors::DecodeError,
    utils::bytes::{read_b32, read_u256, read_usize, read_word},
};

/// One decoded step of an execute batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchAction {
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

/// A decoded execute-batch request (the call arguments, selector already stripped).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecuteBatch {
    pub proposal_id: FixedBytes<32>,
    pub actions: Vec<BatchAction>,
    pub allow_failure_map: U256,
}

/// Decode the post-selector payload of an execute call.
pub fn decode_execute_call(payload: &[u8]) -> Result<ExecuteBatch, DecodeError> {
    // Head: bytes32 inline, offset to Action[], uint256 inline.
    let proposal_id = read_b32(payload, 0)?;
    let actions_pos = read_usize(payload, 32)?;
    let allow_failure_map = read_u256(payload, 64)?;

    // Action[] tail: length word, then one offset word per element, relative to the element area.
    let len = read_usize(payload, actions_pos)?;
    let elems_pos = actions_pos + 32;
    if len > payload.len().saturating_sub(elems_pos) / 32 {
        return Err(DecodeError::OutOfBounds);
    }

    let mut actions = Vec::with_capacity(len);
    for i in 0..len {
        let elem_off = read_usize(payload, elems_pos + 32 * i)?;
        actions.push(decode_action(payload, elems_pos + elem_off)?);
    }

    Ok(ExecuteBatch {
        proposal_id,
        actions,
        allow_failure_map,
    })
}

fn decode_action(payload: &[u8], pos: usize) -> Result<BatchAction, DecodeError> {
    // Element tuple head: address word, uint256 word, offset to bytes (relative to the element).
    let to_word = read_word(payload, pos)?;
    let to = Address::from_slice(&to_word[12..32]);
    let value = read_u256(payload, pos + 32)?;
    let data_off = read_usize(payload, pos + 64)?;

    // bytes tail: length word, then the raw bytes.
    let data_pos = pos + data_off;
    let data_len = read_usize(payload, data_pos)?;
    let data_start = data_pos + 32;
    if data_len > payload.len().saturating_sub(data_start) {
        return Err(DecodeError::OutOfBounds);
    }
    let data = payload[data_start..data_start + data_len].to_vec();

    Ok(BatchAction { to, value, data })
}
