pub mod addressbook;
pub mod chains;
pub mod contract;
pub mod export;
pub mod provider;
pub mod types;
pub mod wallet;

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::mpsc;

use crate::data::contract::TeamContract;
use crate::data::provider::ChainClient;
use crate::data::types::TeamMember;
use crate::events::{Action, AppEvent};

/// Bridges the UI to the chain: every verb spawns one tokio task that
/// performs the call and reports back over the event channel. Nothing
/// here blocks the render loop, and nothing prevents overlapping
/// submissions.
pub struct ContractService {
    client: Arc<ChainClient>,
    contract: Arc<TeamContract>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ContractService {
    pub fn new(
        client: ChainClient,
        contract_address: Address,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let client = Arc::new(client);
        let contract = Arc::new(TeamContract::new(contract_address, client.provider()));
        Self {
            client,
            contract,
            event_tx,
        }
    }

    /// Resolve the signing account and open the session. The session
    /// stays open for the life of the process; there is no disconnect.
    pub fn connect_wallet(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let Some(address) = client.signer_address() else {
                let _ = tx.send(AppEvent::WalletFailed(
                    "No wallet configured. Set --private-key or TEAM_TUI_PRIVATE_KEY.".to_string(),
                ));
                return;
            };

            match client.get_balance(address).await {
                Ok(balance) => {
                    tracing::info!(%address, "wallet connected");
                    let _ = tx.send(AppEvent::WalletConnected { address, balance });
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::WalletFailed(format!(
                        "Failed to connect wallet: {e}"
                    )));
                }
            }
        });
    }

    /// Fetch one member record by wallet address.
    pub fn fetch_member(&self, member: Address) {
        let contract = Arc::clone(&self.contract);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match contract.fetch_member(member).await {
                Ok(record) => {
                    if record.is_registered() {
                        let _ = tx.send(AppEvent::MemberLoaded(Box::new(record)));
                    } else {
                        let _ = tx.send(AppEvent::MemberNotFound(member));
                    }
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!("Failed to fetch member: {e}")));
                }
            }
        });
    }

    /// Seed the roster from the address book: the contract has no
    /// enumeration primitive, so this is one read per known address.
    pub fn fetch_known(&self, addresses: Vec<Address>) {
        for address in addresses {
            self.fetch_member(address);
        }
    }

    /// Submit a state-changing call and await its receipt.
    pub fn submit(&self, action: Action) {
        let contract = Arc::clone(&self.contract);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let kind = action.kind();
            tracing::info!(%kind, "submitting contract call");

            let result = match action.clone() {
                Action::AddMember { member, name } => contract.add_member(member, name).await,
                Action::AssignTask {
                    member,
                    description,
                } => contract.assign_task(member, description).await,
                Action::CompleteTask { member } => contract.complete_task(member).await,
                Action::DeactivateMember { member } => contract.deactivate_member(member).await,
                Action::ReleasePayment { member, amount } => {
                    contract.release_payment(member, amount).await
                }
            };

            match result {
                Ok(outcome) => {
                    tracing::info!(tx_hash = %outcome.tx_hash, gas_used = outcome.gas_used, "call mined");
                    let _ = tx.send(AppEvent::ActionOutcome { kind, outcome });

                    // A deactivated record should read back inactive on the
                    // next render, so refresh it right away.
                    if outcome.success {
                        if let Action::DeactivateMember { member } = action {
                            if let Ok(record) = contract.fetch_member(member).await {
                                if record.is_registered() {
                                    let _ = tx.send(AppEvent::MemberLoaded(Box::new(record)));
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(%kind, error = %e, "contract call failed");
                    let _ = tx.send(AppEvent::ActionFailed {
                        kind,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    /// Write the current roster out as CSV.
    pub fn export_roster(&self, roster: Vec<TeamMember>) {
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let path = export::default_export_path();
            match export::export_roster_csv(&roster, &path) {
                Ok(msg) => {
                    let _ = tx.send(AppEvent::ExportComplete(msg));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(e));
                }
            }
        });
    }
}
