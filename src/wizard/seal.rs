// src/wizard/seal.rs

//! Seal preconditions and construction of the single `create_will` call.
//! Pure: nothing here touches the store or the gateway.

use std::fmt;

use crate::draft::{DraftStore, PartyId, PartyRole};
use crate::ledger::CreateWillCall;

pub const WILL_SIGNATURE_PLACEHOLDER: &str = "signature_placeholder";
pub const SIGNATURE_PROVIDER_PLACEHOLDER: &str = "ooma_wallet";

const SEAL_BLOCKED_NOTICE: &str =
    "Please select at least one asset, one beneficiary, assign a lawyer, and agree to the terms.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealRequirement {
    Agreement,
    Assets,
    Beneficiaries,
    Lawyer,
}

impl SealRequirement {
    pub fn label(self) -> &'static str {
        match self {
            SealRequirement::Agreement => "agreement",
            SealRequirement::Assets => "assets",
            SealRequirement::Beneficiaries => "beneficiaries",
            SealRequirement::Lawyer => "lawyer",
        }
    }
}

/// The party older clients silently used when no lawyer was picked.
/// Offered to the user, never applied automatically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LawyerFallback {
    FirstWitness(PartyId),
    FirstBeneficiary(PartyId),
}

impl LawyerFallback {
    pub fn party_id(&self) -> &str {
        match self {
            LawyerFallback::FirstWitness(id) | LawyerFallback::FirstBeneficiary(id) => id.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    Unmet {
        missing: Vec<SealRequirement>,
        lawyer_fallback: Option<LawyerFallback>,
    },
    /// The assigned id does not name a current Lawyer-role party.
    LawyerUnknown(PartyId),
}

impl ValidationError {
    pub fn short(&self) -> &'static str {
        match self {
            ValidationError::Unmet { .. } => SEAL_BLOCKED_NOTICE,
            ValidationError::LawyerUnknown(_) => {
                "The assigned lawyer is no longer in your list of people."
            }
        }
    }

    pub fn missing(&self) -> &[SealRequirement] {
        match self {
            ValidationError::Unmet { missing, .. } => missing.as_slice(),
            ValidationError::LawyerUnknown(_) => &[],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Unmet {
                missing,
                lawyer_fallback,
            } => {
                let labels: Vec<&str> = missing.iter().map(|r| r.label()).collect();
                write!(f, "seal blocked; missing: {}", labels.join(", "))?;
                match lawyer_fallback {
                    Some(LawyerFallback::FirstWitness(id)) => {
                        write!(f, "; suggested lawyer: {id} (first witness)")
                    }
                    Some(LawyerFallback::FirstBeneficiary(id)) => {
                        write!(f, "; suggested lawyer: {id} (first beneficiary)")
                    }
                    None => Ok(()),
                }
            }
            ValidationError::LawyerUnknown(id) => write!(f, "unknown lawyer id: {id}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The explicitly assigned lawyer, or an error describing the fallback that
/// would have been substituted (first witness, else first beneficiary).
pub fn resolve_lawyer(
    lawyer_id: Option<&str>,
    witness_ids: &[PartyId],
    beneficiary_ids: &[PartyId],
) -> Result<PartyId, ValidationError> {
    if let Some(id) = lawyer_id.filter(|s| !s.is_empty()) {
        return Ok(id.to_string());
    }

    let lawyer_fallback = witness_ids
        .first()
        .cloned()
        .map(LawyerFallback::FirstWitness)
        .or_else(|| {
            beneficiary_ids
                .first()
                .cloned()
                .map(LawyerFallback::FirstBeneficiary)
        });

    Err(ValidationError::Unmet {
        missing: vec![SealRequirement::Lawyer],
        lawyer_fallback,
    })
}

/// All four preconditions at once; returns the resolved lawyer id.
pub fn check_seal_preconditions(
    draft: &DraftStore,
    agreed: bool,
) -> Result<PartyId, ValidationError> {
    let mut missing = Vec::new();

    if !agreed {
        missing.push(SealRequirement::Agreement);
    }
    if draft.selected_asset_ids().is_empty() {
        missing.push(SealRequirement::Assets);
    }
    if draft.selected_beneficiary_ids().is_empty() {
        missing.push(SealRequirement::Beneficiaries);
    }

    let lawyer = resolve_lawyer(
        draft.lawyer_id(),
        draft.selected_witness_ids(),
        draft.selected_beneficiary_ids(),
    );

    let (lawyer_id, lawyer_fallback) = match lawyer {
        Ok(id) => (Some(id), None),
        Err(ValidationError::Unmet {
            lawyer_fallback, ..
        }) => {
            missing.push(SealRequirement::Lawyer);
            (None, lawyer_fallback)
        }
        Err(other) => return Err(other),
    };

    if !missing.is_empty() {
        return Err(ValidationError::Unmet {
            missing,
            lawyer_fallback,
        });
    }

    let lawyer_id = lawyer_id.unwrap_or_default();

    let is_lawyer = draft
        .party(&lawyer_id)
        .map(|p| p.user_role == PartyRole::Lawyer)
        .unwrap_or(false);
    if !is_lawyer {
        return Err(ValidationError::LawyerUnknown(lawyer_id));
    }

    Ok(lawyer_id)
}

/// Non-empty trimmed lines of the instructions block.
pub fn instruction_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn build_create_will_call(
    draft: &DraftStore,
    agreed: bool,
) -> Result<CreateWillCall, ValidationError> {
    let lawyer_id = check_seal_preconditions(draft, agreed)?;

    Ok(CreateWillCall {
        asset_ids: draft.selected_asset_ids().to_vec(),
        lawyer_id,
        digitally_signed: true,
        instructions: instruction_lines(draft.instructions()),
        beneficiary_ids: draft.selected_beneficiary_ids().to_vec(),
        witness_ids: draft.selected_witness_ids().to_vec(),
        signature: WILL_SIGNATURE_PLACEHOLDER.to_string(),
        signature_provider: SIGNATURE_PROVIDER_PLACEHOLDER.to_string(),
    })
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{AssetDraft, PartyDraft, SEED_LAWYER_ID};

    fn ids(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn mk_ready_draft() -> DraftStore {
        let mut d = DraftStore::new();
        let a = d.add_asset(AssetDraft {
            asset_type: "Real Estate".to_string(),
            description: "Lekki Property".to_string(),
            value: "₦5,000,000".to_string(),
            document_proof_url: "ipfs://not_provided".to_string(),
        });
        let b = d.add_party(PartyDraft {
            user_name: "Jane Doe".to_string(),
            user_role: PartyRole::Beneficiary,
            relationship: "Daughter".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "080".to_string(),
            user_signature: "N/A".to_string(),
            user_signature_type: "N/A".to_string(),
        });
        d.set_selected_asset_ids(vec![a]);
        d.set_selected_beneficiary_ids(vec![b]);
        d.set_lawyer_id(Some(SEED_LAWYER_ID.to_string()));
        d
    }

    #[test]
    fn resolve_lawyer_prefers_explicit_choice() {
        let got = resolve_lawyer(Some("party_0"), &ids(&["w"]), &ids(&["b"])).unwrap();
        assert_eq!(got, "party_0");
    }

    #[test]
    fn resolve_lawyer_reports_witness_fallback_without_applying_it() {
        let err = resolve_lawyer(None, &ids(&["w1", "w2"]), &ids(&["b1"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Unmet {
                missing: vec![SealRequirement::Lawyer],
                lawyer_fallback: Some(LawyerFallback::FirstWitness("w1".to_string())),
            }
        );
    }

    #[test]
    fn resolve_lawyer_falls_back_to_beneficiary_then_nothing() {
        let err = resolve_lawyer(Some(""), &[], &ids(&["b1"])).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Unmet {
                lawyer_fallback: Some(LawyerFallback::FirstBeneficiary(ref id)),
                ..
            } if id == "b1"
        ));

        let err = resolve_lawyer(None, &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Unmet {
                lawyer_fallback: None,
                ..
            }
        ));
    }

    #[test]
    fn ready_draft_passes() {
        let d = mk_ready_draft();
        assert_eq!(check_seal_preconditions(&d, true).unwrap(), SEED_LAWYER_ID);
    }

    #[test]
    fn each_missing_condition_blocks() {
        let d = mk_ready_draft();
        let err = check_seal_preconditions(&d, false).unwrap_err();
        assert_eq!(err.missing(), &[SealRequirement::Agreement]);

        let mut d = mk_ready_draft();
        d.set_selected_asset_ids(vec![]);
        assert_eq!(
            check_seal_preconditions(&d, true).unwrap_err().missing(),
            &[SealRequirement::Assets]
        );

        let mut d = mk_ready_draft();
        d.set_selected_beneficiary_ids(vec![]);
        assert_eq!(
            check_seal_preconditions(&d, true).unwrap_err().missing(),
            &[SealRequirement::Beneficiaries]
        );

        let mut d = mk_ready_draft();
        d.set_lawyer_id(None);
        assert_eq!(
            check_seal_preconditions(&d, true).unwrap_err().missing(),
            &[SealRequirement::Lawyer]
        );
    }

    #[test]
    fn empty_draft_reports_everything_at_once() {
        let d = DraftStore::new();
        let err = check_seal_preconditions(&d, false).unwrap_err();
        assert_eq!(err.missing().len(), 4);
        assert_eq!(err.short(), SEAL_BLOCKED_NOTICE);
    }

    #[test]
    fn non_lawyer_assignment_is_rejected() {
        let mut d = mk_ready_draft();
        let jane = d.selected_beneficiary_ids()[0].clone();
        d.set_lawyer_id(Some(jane.clone()));
        assert_eq!(
            check_seal_preconditions(&d, true).unwrap_err(),
            ValidationError::LawyerUnknown(jane)
        );
    }

    #[test]
    fn call_carries_selection_and_placeholders() {
        let mut d = mk_ready_draft();
        d.set_instructions("  Lekki goes to Jane.\n\n  Sell the car. ");

        let call = build_create_will_call(&d, true).unwrap();

        assert_eq!(call.asset_ids, d.selected_asset_ids());
        assert_eq!(call.beneficiary_ids, d.selected_beneficiary_ids());
        assert!(call.witness_ids.is_empty());
        assert_eq!(call.lawyer_id, SEED_LAWYER_ID);
        assert!(call.digitally_signed);
        assert_eq!(call.instructions, ids(&["Lekki goes to Jane.", "Sell the car."]));
        assert_eq!(call.signature, WILL_SIGNATURE_PLACEHOLDER);
        assert_eq!(call.signature_provider, SIGNATURE_PROVIDER_PLACEHOLDER);
    }
}
