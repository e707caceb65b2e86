use alloy::primitives::{Address, U256};

use crate::data::types::{TeamMember, TxOutcome};
use crate::utils;

/// Views the user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Roster,
    Operations,
}

/// The five state-changing contract verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    AddMember,
    AssignTask,
    CompleteTask,
    DeactivateMember,
    ReleasePayment,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::AddMember,
            ActionKind::AssignTask,
            ActionKind::CompleteTask,
            ActionKind::DeactivateMember,
            ActionKind::ReleasePayment,
        ]
    }

    /// Labels for the form fields this verb needs, in input order.
    pub fn field_labels(&self) -> &'static [&'static str] {
        match self {
            ActionKind::AddMember => &["wallet address", "name"],
            ActionKind::AssignTask => &["member address", "task description"],
            ActionKind::CompleteTask => &["member address"],
            ActionKind::DeactivateMember => &["member address"],
            ActionKind::ReleasePayment => &["member address", "amount (wei)"],
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ActionKind::AddMember => "Team member added",
            ActionKind::AssignTask => "Task assigned",
            ActionKind::CompleteTask => "Task completed",
            ActionKind::DeactivateMember => "Team member deactivated",
            ActionKind::ReleasePayment => "Payment released",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::AddMember => write!(f, "Add Team Member"),
            ActionKind::AssignTask => write!(f, "Assign Task"),
            ActionKind::CompleteTask => write!(f, "Complete Task"),
            ActionKind::DeactivateMember => write!(f, "Deactivate Member"),
            ActionKind::ReleasePayment => write!(f, "Release Payment"),
        }
    }
}

/// A fully validated contract call, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddMember { member: Address, name: String },
    AssignTask { member: Address, description: String },
    CompleteTask { member: Address },
    DeactivateMember { member: Address },
    ReleasePayment { member: Address, amount: U256 },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddMember { .. } => ActionKind::AddMember,
            Action::AssignTask { .. } => ActionKind::AssignTask,
            Action::CompleteTask { .. } => ActionKind::CompleteTask,
            Action::DeactivateMember { .. } => ActionKind::DeactivateMember,
            Action::ReleasePayment { .. } => ActionKind::ReleasePayment,
        }
    }

    /// Build an action from raw form inputs. Every required field is
    /// checked here so that an invalid form never reaches the network.
    pub fn from_inputs(kind: ActionKind, inputs: &[String]) -> Result<Action, String> {
        let field = |i: usize| inputs.get(i).map(|s| s.trim()).unwrap_or("");

        match kind {
            ActionKind::AddMember => {
                if field(0).is_empty() || field(1).is_empty() {
                    return Err(
                        "Please enter both the wallet address and a name.".to_string()
                    );
                }
                let member = utils::parse_address(field(0))?;
                Ok(Action::AddMember {
                    member,
                    name: field(1).to_string(),
                })
            }
            ActionKind::AssignTask => {
                if field(0).is_empty() || field(1).is_empty() {
                    return Err(
                        "Please enter both the team member address and task description."
                            .to_string(),
                    );
                }
                let member = utils::parse_address(field(0))?;
                Ok(Action::AssignTask {
                    member,
                    description: field(1).to_string(),
                })
            }
            ActionKind::CompleteTask => {
                if field(0).is_empty() {
                    return Err("Please enter the team member address.".to_string());
                }
                Ok(Action::CompleteTask {
                    member: utils::parse_address(field(0))?,
                })
            }
            ActionKind::DeactivateMember => {
                if field(0).is_empty() {
                    return Err("Please enter the team member address.".to_string());
                }
                Ok(Action::DeactivateMember {
                    member: utils::parse_address(field(0))?,
                })
            }
            ActionKind::ReleasePayment => {
                if field(0).is_empty() || field(1).is_empty() {
                    return Err(
                        "Please enter both team member address and amount.".to_string()
                    );
                }
                Ok(Action::ReleasePayment {
                    member: utils::parse_address(field(0))?,
                    amount: utils::parse_wei(field(1))?,
                })
            }
        }
    }
}

/// Events sent from background tasks and components to the main app loop
#[derive(Debug)]
pub enum AppEvent {
    // Session
    Connected(u64), // chain_id
    WalletConnected { address: Address, balance: U256 },
    WalletFailed(String),

    // Member reads
    MemberLoaded(Box<TeamMember>),
    MemberNotFound(Address),

    // Contract writes
    SubmitAction(Action),
    ActionOutcome { kind: ActionKind, outcome: TxOutcome },
    ActionFailed { kind: ActionKind, message: String },

    // Export
    ExportComplete(String),

    // Navigation
    Navigate(View),
    Back,

    // Status
    Status(String),
    Error(String),
}
