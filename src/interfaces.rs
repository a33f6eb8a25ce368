//! Solidity ABI interface scaffolding for the governance framework.
//!
//! The `sol!` declarations below are the wire-format contract this condition consumes: the
//! execute-batch call shape (and its compile-time selector), the permission-condition surface the
//! framework probes, and the management-authority collaborator consulted on mutations.

use alloy_sol_types::sol;

sol! {
    /// One step of an execute batch: a call of `data` against `to`, forwarding `value`.
    struct Action {
        address to;
        uint256 value;
        bytes data;
    }

    /// The governed account's batch-execution surface. Only the call shape matters here; the
    /// condition never performs this call, it recognises it.
    interface IExecutor {
        function execute(bytes32 proposalId, Action[] calldata actions, uint256 allowFailureMap)
            external
            returns (bytes[] memory execResults, uint256 failureMap);
    }

    /// Permission-condition surface invoked by the governance framework before executing.
    interface IPermissionCondition {
        function isGranted(address where, address who, bytes32 permissionId, bytes calldata data)
            external
            view
            returns (bool);
    }

    /// Administrative capability collaborator: decides who may mutate the allow-list.
    interface IManageAuthority {
        function mayManage(address caller) external view returns (bool);
    }
}
