// src/draft/types.rs

use serde::{Deserialize, Serialize};

pub type AssetId = String;
pub type PartyId = String;

pub const PROOF_URL_NOT_PROVIDED: &str = "ipfs://not_provided";
pub const SIGNATURE_NOT_PROVIDED: &str = "N/A";

/// Reserved id of the pre-populated lawyer. Generated ids start at 1.
pub const SEED_LAWYER_ID: &str = "party_0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    Beneficiary,
    Witness,
    Lawyer,
}

impl PartyRole {
    pub const ALL: [PartyRole; 3] = [PartyRole::Beneficiary, PartyRole::Witness, PartyRole::Lawyer];

    pub fn label(self) -> &'static str {
        match self {
            PartyRole::Beneficiary => "Beneficiary",
            PartyRole::Witness => "Witness",
            PartyRole::Lawyer => "Lawyer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub id: AssetId,
    pub asset_type: String,
    pub description: String,
    /// Display string, e.g. "₦5,000,000". Never parsed back into a number here.
    pub value: String,
    pub document_proof_url: String,
}

/// Asset fields without an id, as produced by the asset form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDraft {
    pub asset_type: String,
    pub description: String,
    pub value: String,
    pub document_proof_url: String,
}

/// Shallow-merge update: `None` keeps the current field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetPatch {
    pub asset_type: Option<String>,
    pub description: Option<String>,
    pub value: Option<String>,
    pub document_proof_url: Option<String>,
}

impl AssetPatch {
    pub(crate) fn apply_to(self, asset: &mut Asset) {
        if let Some(v) = self.asset_type {
            asset.asset_type = v;
        }
        if let Some(v) = self.description {
            asset.description = v;
        }
        if let Some(v) = self.value {
            asset.value = v;
        }
        if let Some(v) = self.document_proof_url {
            asset.document_proof_url = v;
        }
    }
}

impl From<AssetDraft> for AssetPatch {
    fn from(d: AssetDraft) -> Self {
        Self {
            asset_type: Some(d.asset_type),
            description: Some(d.description),
            value: Some(d.value),
            document_proof_url: Some(d.document_proof_url),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    pub id: PartyId,
    pub user_name: String,
    pub user_role: PartyRole,
    pub relationship: String,
    pub email: String,
    pub phone_number: String,
    pub user_signature: String,
    pub user_signature_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyDraft {
    pub user_name: String,
    pub user_role: PartyRole,
    pub relationship: String,
    pub email: String,
    pub phone_number: String,
    pub user_signature: String,
    pub user_signature_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartyPatch {
    pub user_name: Option<String>,
    pub user_role: Option<PartyRole>,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub user_signature: Option<String>,
    pub user_signature_type: Option<String>,
}

impl PartyPatch {
    pub(crate) fn apply_to(self, party: &mut Party) {
        if let Some(v) = self.user_name {
            party.user_name = v;
        }
        if let Some(v) = self.user_role {
            party.user_role = v;
        }
        if let Some(v) = self.relationship {
            party.relationship = v;
        }
        if let Some(v) = self.email {
            party.email = v;
        }
        if let Some(v) = self.phone_number {
            party.phone_number = v;
        }
        if let Some(v) = self.user_signature {
            party.user_signature = v;
        }
        if let Some(v) = self.user_signature_type {
            party.user_signature_type = v;
        }
    }
}

impl From<PartyDraft> for PartyPatch {
    fn from(d: PartyDraft) -> Self {
        Self {
            user_name: Some(d.user_name),
            user_role: Some(d.user_role),
            relationship: Some(d.relationship),
            email: Some(d.email),
            phone_number: Some(d.phone_number),
            user_signature: Some(d.user_signature),
            user_signature_type: Some(d.user_signature_type),
        }
    }
}

/// Party list every fresh draft starts from: a single default lawyer.
pub fn seed_parties() -> Vec<Party> {
    vec![Party {
        id: SEED_LAWYER_ID.to_string(),
        user_name: "Robert Brown".to_string(),
        user_role: PartyRole::Lawyer,
        relationship: "Legal Advisor".to_string(),
        email: "robert@example.com".to_string(),
        phone_number: "555-555-5555".to_string(),
        user_signature: SIGNATURE_NOT_PROVIDED.to_string(),
        user_signature_type: SIGNATURE_NOT_PROVIDED.to_string(),
    }]
}

/// Selected records resolved against the current collections, in selection order.
#[derive(Debug)]
pub struct WillPreview<'a> {
    pub assets: Vec<&'a Asset>,
    pub beneficiaries: Vec<&'a Party>,
    pub witnesses: Vec<&'a Party>,
    pub lawyer: Option<&'a Party>,
    pub instructions: &'a str,
}
