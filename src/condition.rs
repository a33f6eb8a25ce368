//! Stylus permission condition gating a governance account's execute batches by selector.
//!
//! The governance framework consults `isGranted` before letting a caller run an execute batch.
//! This condition permits a batch iff the payload is structurally an `IExecutor.execute` call and
//! every action in it invokes a selector on the administrator-maintained allow-list.
//!
//! Design notes:
//! - Who may manage the list is an external concern (`IManageAuthority`); this contract only
//!   consults it, once per mutation attempt, before touching state.
//! - Mutations on an identifier already in the target state revert instead of no-opping, so the
//!   emitted events stay a faithful audit trail of actual transitions.
//! - The evaluation path never reverts: anything it cannot positively recognise is denied.

use alloc::{vec, vec::Vec};

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes},
    prelude::*,
};

use alloy_sol_types::{sol, SolCall};
use stylus_sdk::stylus_proc::SolidityError;

use crate::{
    authority::{ManageAuthority, OnchainManageAuthority, MANAGE_CALL_GAS_CAP},
    gate::{evaluate_calldata, SelectorRegistry},
    interfaces::IPermissionCondition,
};

sol! {
    /// A selector joined the allow-list.
    event SelectorAllowed(bytes4 selector);
    /// A selector left the allow-list.
    event SelectorDisallowed(bytes4 selector);

    #[derive(Debug)]
    error AlreadyInitialized();
    #[derive(Debug)]
    error InvalidManageAuthority();
    #[derive(Debug)]
    error SelectorAlreadyAllowed(bytes4 selector);
    #[derive(Debug)]
    error SelectorAlreadyDisallowed(bytes4 selector);
    #[derive(Debug)]
    error ManagementUnauthorized(address caller);
}

#[derive(SolidityError, Debug)]
pub enum ConditionError {
    AlreadyInitialized(AlreadyInitialized),
    InvalidManageAuthority(InvalidManageAuthority),
    SelectorAlreadyAllowed(SelectorAlreadyAllowed),
    SelectorAlreadyDisallowed(SelectorAlreadyDisallowed),
    ManagementUnauthorized(ManagementUnauthorized),
}

// ERC-165 interface id of `supportsInterface(bytes4)`.
const ERC165_INTERFACE_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

sol_storage! {
    #[entrypoint]
    pub struct ExecuteSelectorCondition {
        /// Selectors an execute-batch action may invoke.
        mapping(bytes4 => bool) allowed_selectors;

        /// Authority contract consulted before any allow-list mutation. Doubles as the
        /// initialization marker; it is never zero after `initialize`.
        address manage_authority;
    }
}

#[public]
impl ExecuteSelectorCondition {
    /// One-shot configuration: the management authority and the initial allow-list.
    ///
    /// Seed duplicates are overwritten rather than rejected; an event is emitted only for
    /// selectors that actually transition.
    pub fn initialize(
        &mut self,
        manage_authority: Address,
        initial_selectors: Vec<FixedBytes<4>>,
    ) -> Result<(), ConditionError> {
        if self.manage_authority.get() != Address::ZERO {
            return Err(ConditionError::AlreadyInitialized(AlreadyInitialized {}));
        }
        if manage_authority == Address::ZERO {
            return Err(ConditionError::InvalidManageAuthority(
                InvalidManageAuthority {},
            ));
        }

        self.manage_authority.set(manage_authority);
        for selector in initial_selectors {
            if self.allowed_selectors.get(selector) {
                continue;
            }
            self.allowed_selectors.insert(selector, true);
            log(self.vm(), SelectorAllowed { selector });
        }
        Ok(())
    }

    /// Add a selector to the allow-list. Management capability required.
    pub fn allow_selector(&mut self, selector: FixedBytes<4>) -> Result<(), ConditionError> {
        let caller = self.vm().msg_sender();
        let authority =
            OnchainManageAuthority::new(self.manage_authority.get(), MANAGE_CALL_GAS_CAP);
        self._allow_selector(&authority, caller, selector)
    }

    /// Remove a selector from the allow-list. Management capability required.
    pub fn disallow_selector(&mut self, selector: FixedBytes<4>) -> Result<(), ConditionError> {
        let caller = self.vm().msg_sender();
        let authority =
            OnchainManageAuthority::new(self.manage_authority.get(), MANAGE_CALL_GAS_CAP);
        self._disallow_selector(&authority, caller, selector)
    }

    /// Membership query; total, no capability required.
    pub fn is_selector_allowed(&self, selector: FixedBytes<4>) -> bool {
        self.allowed_selectors.get(selector)
    }

    /// The configured management authority.
    pub fn manage_authority(&self) -> Address {
        self.manage_authority.get()
    }

    /// `IPermissionCondition.isGranted`.
    ///
    /// `_where`, `_who` and `_permission_id` identify which permission check this is; the policy
    /// itself only inspects the payload. Read-only and total: malformed payloads answer `false`.
    pub fn is_granted(
        &self,
        _where: Address,
        _who: Address,
        _permission_id: FixedBytes<32>,
        data: Bytes,
    ) -> bool {
        evaluate_calldata(self, &data)
    }

    /// ERC-165 detection: this contract is a permission condition.
    pub fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        interface_id.0 == ERC165_INTERFACE_ID
            || interface_id.0 == IPermissionCondition::isGrantedCall::SELECTOR
    }
}

impl SelectorRegistry for ExecuteSelectorCondition {
    fn is_allowed(&self, selector: FixedBytes<4>) -> bool {
        self.allowed_selectors.get(selector)
    }
}

impl ExecuteSelectorCondition {
    fn _allow_selector(
        &mut self,
        authority: &impl ManageAuthority,
        caller: Address,
        selector: FixedBytes<4>,
    ) -> Result<(), ConditionError> {
        if !authority.may_manage(caller) {
            return Err(ConditionError::ManagementUnauthorized(
                ManagementUnauthorized { caller },
            ));
        }
        if self.allowed_selectors.get(selector) {
            return Err(ConditionError::SelectorAlreadyAllowed(
                SelectorAlreadyAllowed { selector },
            ));
        }
        self.allowed_selectors.insert(selector, true);
        log(self.vm(), SelectorAllowed { selector });
        Ok(())
    }

    fn _disallow_selector(
        &mut self,
        authority: &impl ManageAuthority,
        caller: Address,
        selector: FixedBytes<4>,
    ) -> Result<(), ConditionError> {
        if !authority.may_manage(caller) {
            return Err(ConditionError::ManagementUnauthorized(
                ManagementUnauthorized { caller },
            ));
        }
        if !self.allowed_selectors.get(selector) {
            return Err(ConditionError::SelectorAlreadyDisallowed(
                SelectorAlreadyDisallowed { selector },
            ));
        }
        // Erase the slot; a removed selector is indistinguishable from one never added.
        self.allowed_selectors.delete(selector);
        log(self.vm(), SelectorDisallowed { selector });
        Ok(())
    }
}
