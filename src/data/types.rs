use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// One member record as stored by the contract's `teamMembers` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub wallet_address: Address,
    pub name: String,
    pub tasks_assigned: U256,
    pub tasks_completed: U256,
    pub active: bool,
}

impl TeamMember {
    /// The mapping returns an all-zero record for addresses that were
    /// never added; the zero wallet address is the reliable marker.
    pub fn is_registered(&self) -> bool {
        self.wallet_address != Address::ZERO
    }
}

/// Receipt summary for a submitted state-changing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: B256,
    pub gas_used: u64,
    pub success: bool,
}

/// An address that has previously resolved to a live member record,
/// persisted so the roster can be re-seeded on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownAddress {
    pub address: Address,
    pub name: String,
    pub added_at: u64,
}

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub symbol: String,
    pub explorer_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(addr: Address, active: bool) -> TeamMember {
        TeamMember {
            wallet_address: addr,
            name: "Alice".to_string(),
            tasks_assigned: U256::from(3u64),
            tasks_completed: U256::from(1u64),
            active,
        }
    }

    #[test]
    fn test_zero_record_is_unregistered() {
        let record = TeamMember {
            wallet_address: Address::ZERO,
            name: String::new(),
            tasks_assigned: U256::ZERO,
            tasks_completed: U256::ZERO,
            active: false,
        };
        assert!(!record.is_registered());
    }

    #[test]
    fn test_nonzero_record_is_registered() {
        let addr = Address::from_slice(&[0x11; 20]);
        assert!(member(addr, true).is_registered());
        assert!(member(addr, false).is_registered());
    }

    #[test]
    fn test_known_address_roundtrip() {
        let entry = KnownAddress {
            address: Address::from_slice(&[0x22; 20]),
            name: "Bob".to_string(),
            added_at: 1700000000,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: KnownAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back.address, entry.address);
        assert_eq!(back.name, "Bob");
        assert_eq!(back.added_at, 1700000000);
    }
}
