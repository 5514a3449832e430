// src/ledger/mod.rs

//! Boundary to the wallet / smart-contract layer. Only the entry points the
//! will workflow consumes are modelled here; the contract itself lives elsewhere.

mod memory;

pub use memory::{LedgerCall, MemoryLedger};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type names of the objects the contract mints, appended to `<package>::ooma::`.
pub const TYPE_WILL: &str = "Will";
pub const TYPE_ASSET: &str = "Asset";
pub const TYPE_BENEFICIARY: &str = "Beneficiary";
pub const TYPE_WITNESS: &str = "Witness";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssetCall {
    pub asset_type: String,
    pub description: String,
    pub document_proof_url: String,
    pub value: String,
}

/// Arguments shared by `create_beneficiary` and `create_witness`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePartyCall {
    pub name: String,
    pub signature: String,
    pub signature_type: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWillCall {
    pub asset_ids: Vec<String>,
    pub lawyer_id: String,
    pub digitally_signed: bool,
    pub instructions: Vec<String>,
    pub beneficiary_ids: Vec<String>,
    pub witness_ids: Vec<String>,
    pub signature: String,
    pub signature_provider: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub digest: String,
    /// Object ids minted by the transaction.
    pub created: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedObject {
    pub object_id: String,
    pub type_tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// The wallet declined to sign.
    Rejected(String),
    /// The transaction executed and aborted.
    Reverted(String),
    /// The node or wallet could not be reached.
    Network(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // raw message only; it is shown to the user as-is
        match self {
            LedgerError::Rejected(s) | LedgerError::Reverted(s) | LedgerError::Network(s) => {
                write!(f, "{s}")
            }
        }
    }
}

impl std::error::Error for LedgerError {}

/// Calls block until the wallet answers; callers that must not block run them on a worker.
pub trait LedgerGateway: Send + Sync {
    fn create_asset(&self, call: &CreateAssetCall) -> Result<TxReceipt, LedgerError>;

    fn create_beneficiary(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError>;

    fn create_witness(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError>;

    fn create_will(&self, call: &CreateWillCall) -> Result<TxReceipt, LedgerError>;

    /// Objects owned by `owner` whose type tag starts with `type_prefix`.
    fn owned_objects(&self, owner: &str, type_prefix: &str)
        -> Result<Vec<OwnedObject>, LedgerError>;
}
