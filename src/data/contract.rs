use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use thiserror::Error;

use crate::data::types::{TeamMember, TxOutcome};

alloy::sol! {
    #[sol(rpc)]
    contract TeamManagement {
        event TaskAssigned(address indexed teamMember, string taskDescription);

        function addTeamMember(address walletAddress, string calldata name) external;
        function assignTask(address teamMember, string calldata taskDescription) external;
        function completeTask(address teamMember) external;
        function deactivateTeamMember(address teamMember) external;
        function releasePayment(address teamMember, uint256 amount) external;
        function teamMembers(address member)
            external
            view
            returns (
                address walletAddress,
                string memory name,
                uint256 totalTasksAssigned,
                uint256 totalTasksCompleted,
                bool isActive
            );
    }
}

/// Failure modes of a contract call, classified once at this layer so the
/// rest of the program matches on variants instead of error strings.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("Address is already a member")]
    AlreadyMember,
    #[error("Call reverted: {0}")]
    Reverted(String),
    #[error("{0}")]
    Rpc(String),
}

/// Pull the ABI-encoded revert payload out of a JSON-RPC error response,
/// if there is one, and decode it to a human-readable reason.
fn revert_reason(err: &alloy::contract::Error) -> Option<String> {
    let alloy::contract::Error::TransportError(transport) = err else {
        return None;
    };
    let payload = transport.as_error_resp()?;
    let data = payload.as_revert_data()?;
    alloy::sol_types::decode_revert_reason(&data)
}

fn classify(err: alloy::contract::Error) -> CallError {
    match revert_reason(&err) {
        Some(reason) => classify_reason(&reason),
        None => CallError::Rpc(err.to_string()),
    }
}

/// Map a decoded revert reason to a variant. The contract rejects a
/// duplicate add with a reason carrying "already a member"; that is the
/// only revert this tool needs to tell apart from the rest.
pub fn classify_reason(reason: &str) -> CallError {
    if reason.contains("already a member") {
        CallError::AlreadyMember
    } else {
        CallError::Reverted(reason.to_string())
    }
}

fn outcome(receipt: &TransactionReceipt) -> TxOutcome {
    TxOutcome {
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
        success: receipt.status(),
    }
}

/// Typed access to the TeamManagement contract at a fixed address.
/// Write calls are signed by whatever wallet the provider was built with.
pub struct TeamContract {
    address: Address,
    provider: DynProvider,
}

impl TeamContract {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self { address, provider }
    }

    pub async fn add_member(&self, member: Address, name: String) -> Result<TxOutcome, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let pending = contract
            .addTeamMember(member, name)
            .send()
            .await
            .map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CallError::Rpc(e.to_string()))?;
        Ok(outcome(&receipt))
    }

    pub async fn assign_task(
        &self,
        member: Address,
        description: String,
    ) -> Result<TxOutcome, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let pending = contract
            .assignTask(member, description)
            .send()
            .await
            .map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CallError::Rpc(e.to_string()))?;
        Ok(outcome(&receipt))
    }

    pub async fn complete_task(&self, member: Address) -> Result<TxOutcome, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let pending = contract
            .completeTask(member)
            .send()
            .await
            .map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CallError::Rpc(e.to_string()))?;
        Ok(outcome(&receipt))
    }

    pub async fn deactivate_member(&self, member: Address) -> Result<TxOutcome, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let pending = contract
            .deactivateTeamMember(member)
            .send()
            .await
            .map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CallError::Rpc(e.to_string()))?;
        Ok(outcome(&receipt))
    }

    pub async fn release_payment(
        &self,
        member: Address,
        amount: alloy::primitives::U256,
    ) -> Result<TxOutcome, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let pending = contract
            .releasePayment(member, amount)
            .send()
            .await
            .map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CallError::Rpc(e.to_string()))?;
        Ok(outcome(&receipt))
    }

    /// Non-state-changing read of one member record. Unknown addresses
    /// come back as the all-zero record; see `TeamMember::is_registered`.
    pub async fn fetch_member(&self, member: Address) -> Result<TeamMember, CallError> {
        let contract = TeamManagement::new(self.address, self.provider.clone());
        let record = contract.teamMembers(member).call().await.map_err(classify)?;
        Ok(TeamMember {
            wallet_address: record.walletAddress,
            name: record.name,
            tasks_assigned: record.totalTasksAssigned,
            tasks_completed: record.totalTasksCompleted,
            active: record.isActive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_already_member_reason() {
        let err = classify_reason("TeamManagement: already a member");
        assert!(matches!(err, CallError::AlreadyMember));
    }

    #[test]
    fn test_classify_already_member_with_revert_prefix() {
        // decode_revert_reason renders Error(string) payloads with a
        // "revert:" prefix; classification must not depend on it.
        let err = classify_reason("revert: already a member");
        assert!(matches!(err, CallError::AlreadyMember));
    }

    #[test]
    fn test_classify_other_reason() {
        let err = classify_reason("TeamManagement: not an active member");
        match err {
            CallError::Reverted(reason) => assert!(reason.contains("not an active member")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            CallError::AlreadyMember.to_string(),
            "Address is already a member"
        );
        assert_eq!(
            CallError::Reverted("out of funds".to_string()).to_string(),
            "Call reverted: out of funds"
        );
    }
}
