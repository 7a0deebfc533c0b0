//! UI state container for the bridge.
//!
//! Everything the presentation layer renders lives here as plain serde
//! types with pure update functions. The wasm layer holds one instance and
//! replaces whole fields between suspension points; nothing in this module
//! touches the provider or the contract.

use serde::{Deserialize, Serialize};

use crate::address::addresses_match;

/// Wallet connection state, derived entirely from provider and contract
/// responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub wallet_connected: bool,
    pub own_address: Option<String>,
    pub is_owner: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    /// Record a successful account authorization.
    pub fn with_account(self, address: String) -> Self {
        Self {
            wallet_connected: true,
            own_address: Some(address),
            ..self
        }
    }

    /// Set the visible error message.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self {
            last_error: Some(message.into()),
            ..self
        }
    }

    /// Recompute the owner flag against the contract's recorded owner.
    ///
    /// `is_owner` holds exactly when the session is connected and the own
    /// address equals the owner address case-insensitively.
    pub fn with_owner_recomputed(self, owner_address: Option<&str>) -> Self {
        let is_owner = match (&self.own_address, owner_address) {
            (Some(own), Some(owner)) if self.wallet_connected => addresses_match(own, owner),
            _ => false,
        };
        Self { is_owner, ..self }
    }
}

/// Wholesale snapshot of the token's on-chain metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    pub name: String,
    pub symbol: String,
    /// Human-scaled decimal string at the token's 18-decimal precision
    pub total_supply_decimal: String,
    pub owner_address: Option<String>,
}

impl Default for TokenSnapshot {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply_decimal: "0.0".to_string(),
            owner_address: None,
        }
    }
}

impl TokenSnapshot {
    /// Republish the total supply after a confirmed burn or mint.
    pub fn with_total_supply(self, total_supply_decimal: String) -> Self {
        Self {
            total_supply_decimal,
            ..self
        }
    }
}

/// Transient form state, mutated on every keystroke and reset only by a
/// page reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub target_address: String,
    pub transfer_amount: String,
    pub burn_amount: String,
    pub mint_amount: String,
}

/// Form fields, keyed like the page's input `name` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TargetAddress,
    TransferAmount,
    BurnAmount,
    MintAmount,
}

impl FormField {
    /// Parse an input's `name` attribute.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "targetAddress" => Some(FormField::TargetAddress),
            "transferAmount" => Some(FormField::TransferAmount),
            "burnAmount" => Some(FormField::BurnAmount),
            "mintAmount" => Some(FormField::MintAmount),
            _ => None,
        }
    }
}

impl FormInput {
    /// Per-keystroke update of a single field.
    pub fn with_field(self, field: FormField, value: String) -> Self {
        match field {
            FormField::TargetAddress => Self {
                target_address: value,
                ..self
            },
            FormField::TransferAmount => Self {
                transfer_amount: value,
                ..self
            },
            FormField::BurnAmount => Self {
                burn_amount: value,
                ..self
            },
            FormField::MintAmount => Self {
                mint_amount: value,
                ..self
            },
        }
    }
}

/// Per-operation transaction lifecycle.
///
/// `Failed` is terminal for the attempt; the user must re-submit manually.
/// No local timeout exists between `Submitted` and a terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TxState {
    #[default]
    Idle,
    Submitted {
        #[serde(rename = "txHash")]
        tx_hash: String,
    },
    Confirmed {
        #[serde(rename = "txHash")]
        tx_hash: String,
    },
    Failed {
        reason: String,
    },
}

impl TxState {
    /// Whether the attempt has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxState::Confirmed { .. } | TxState::Failed { .. })
    }
}
