//! Administrative capability check for allow-list mutations.
//!
//! Who may manage the list is decided outside this contract. The trait keeps the mutation logic
//! testable with a stub; the on-chain implementation consults the configured authority contract
//! with a gas-capped `staticcall` and treats every anomaly (failed call, malformed return) as a
//! refusal.

use alloy_sol_types::SolCall;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    call::RawCall,
};

use crate::interfaces::IManageAuthority;

/// Gas forwarded to the authority's `mayManage` view. The predicate is a membership lookup on the
/// authority side; anything that needs more than this is not a predicate we want to trust.
pub const MANAGE_CALL_GAS_CAP: u64 = 100_000;

/// Yes/no capability check, consulted once per mutation attempt before any state change.
pub trait ManageAuthority {
    fn may_manage(&self, caller: Address) -> bool;
}

/// Authority backed by an `IManageAuthority` contract.
pub struct OnchainManageAuthority {
    pub authority: Address,
    pub gas_cap: u64,
}

impl OnchainManageAuthority {
    pub fn new(authority: Address, gas_cap: u64) -> Self {
        Self { authority, gas_cap }
    }
}

impl ManageAuthority for OnchainManageAuthority {
    fn may_manage(&self, caller: Address) -> bool {
        let data = IManageAuthority::mayManageCall { caller }.abi_encode();

        // bytes-in, bytes-out staticcall with gas cap.
        let out = match unsafe {
            RawCall::new_static()
                .gas(self.gas_cap)
                .call(self.authority, &data)
        } {
            Ok(out) => out,
            Err(_) => return false,
        };
        if out.len() < 32 {
            return false;
        }
        U256::from_be_slice(&out[0..32]) != U256::ZERO
    }
}
