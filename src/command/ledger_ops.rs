// src/command/ledger_ops.rs

use crate::activity_log::{record_activity, ActivityClass};
use crate::command_state::*;
use crate::context::AppCtx;
use crate::draft::PartyRole;
use crate::error::{AppError, AppResult};
use crate::ledger::{
    CreateAssetCall, CreatePartyCall, LedgerGateway, TxReceipt, TYPE_ASSET, TYPE_BENEFICIARY,
    TYPE_WILL, TYPE_WITNESS,
};
use crate::types::AppState;

/// Counts of the contract objects the signed-in wallet owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub wills: usize,
    pub assets: usize,
    pub beneficiaries: usize,
    pub witnesses: usize,
}

impl LedgerSummary {
    pub fn will_status(&self) -> &'static str {
        if self.wills > 0 {
            "Created"
        } else {
            "Not Created"
        }
    }
}

// ======================================================
// publishing single records
// ======================================================

pub fn publish_asset(id: &str, state: &AppState, gateway: &dyn LedgerGateway) -> AppResult<TxReceipt> {
    require_user(state)?;

    let call = {
        let draft = lock_draft(state)?;
        let a = draft
            .asset(id)
            .ok_or_else(|| AppError::AssetNotFound(id.to_string()))?;
        CreateAssetCall {
            asset_type: a.asset_type.clone(),
            description: a.description.clone(),
            document_proof_url: a.document_proof_url.clone(),
            value: a.value.clone(),
        }
    };

    let receipt = gateway.create_asset(&call)?;

    record_activity(
        state,
        ActivityClass::Draft,
        "publish_asset",
        "asset_published",
        &format!("{id} digest={}", receipt.digest),
    );
    Ok(receipt)
}

/// Beneficiaries and witnesses only; the contract has no entry point for lawyers.
pub fn publish_party(id: &str, state: &AppState, gateway: &dyn LedgerGateway) -> AppResult<TxReceipt> {
    require_user(state)?;

    let (role, call) = {
        let draft = lock_draft(state)?;
        let p = draft
            .party(id)
            .ok_or_else(|| AppError::PartyNotFound(id.to_string()))?;
        let call = CreatePartyCall {
            name: p.user_name.clone(),
            signature: p.user_signature.clone(),
            signature_type: p.user_signature_type.clone(),
            phone_number: p.phone_number.clone(),
            email: p.email.clone(),
        };
        (p.user_role, call)
    };

    let receipt = match role {
        PartyRole::Beneficiary => gateway.create_beneficiary(&call)?,
        PartyRole::Witness => gateway.create_witness(&call)?,
        PartyRole::Lawyer => return Err(AppError::LawyerNotPublishable),
    };

    record_activity(
        state,
        ActivityClass::Draft,
        "publish_party",
        "party_published",
        &format!("{id} ({}) digest={}", role.label(), receipt.digest),
    );
    Ok(receipt)
}

// ======================================================
// dashboard
// ======================================================

pub fn ledger_summary(
    state: &AppState,
    ctx: &AppCtx,
    gateway: &dyn LedgerGateway,
) -> AppResult<LedgerSummary> {
    let user = require_user(state)?;

    let objects = gateway.owned_objects(&user.address, &ctx.ledger_type_prefix())?;

    let will_tag = ctx.ledger_type_tag(TYPE_WILL);
    let asset_tag = ctx.ledger_type_tag(TYPE_ASSET);
    let beneficiary_tag = ctx.ledger_type_tag(TYPE_BENEFICIARY);
    let witness_tag = ctx.ledger_type_tag(TYPE_WITNESS);

    let mut summary = LedgerSummary::default();
    for obj in objects {
        let tag = obj.type_tag.as_str();
        if tag == will_tag {
            summary.wills += 1;
        } else if tag == asset_tag {
            summary.assets += 1;
        } else if tag == beneficiary_tag {
            summary.beneficiaries += 1;
        } else if tag == witness_tag {
            summary.witnesses += 1;
        }
    }

    Ok(summary)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{save_asset, save_party, sign_in_demo};
    use crate::draft::{AssetForm, PartyForm, SEED_LAWYER_ID};
    use crate::ledger::{LedgerCall, LedgerError, MemoryLedger};
    use crate::session::DEMO_WALLET_ADDRESS;
    use tempfile::tempdir;

    fn mk_env(dir: &std::path::Path) -> (AppState, AppCtx, MemoryLedger) {
        let state = AppState::new_for_tests(dir).expect("state");
        let ctx = AppCtx::new(dir.to_path_buf()).with_ledger_package("0xpkg");
        let ledger = MemoryLedger::new(DEMO_WALLET_ADDRESS, "0xpkg");
        (state, ctx, ledger)
    }

    fn mk_party(role: PartyRole) -> PartyForm {
        PartyForm {
            user_name: "Jane Doe".into(),
            relationship: "Daughter".into(),
            email: "jane@example.com".into(),
            phone_number: "0801".into(),
            user_role: role,
            ..PartyForm::default()
        }
    }

    #[test]
    fn publishing_requires_sign_in() {
        let td = tempdir().unwrap();
        let (state, _ctx, ledger) = mk_env(td.path());

        match publish_asset("asset_1", &state, &ledger) {
            Err(AppError::NotSignedIn) => {}
            other => panic!("expected NotSignedIn, got {:?}", other),
        }
    }

    #[test]
    fn publish_asset_sends_stored_fields() {
        let td = tempdir().unwrap();
        let (state, _ctx, ledger) = mk_env(td.path());
        sign_in_demo(&state).unwrap();

        let form = AssetForm {
            asset_type: "Vehicle".into(),
            description: "Camry".into(),
            value: "1200000".into(),
            document_proof_url: String::new(),
        };
        let id = save_asset(&form, None, &state).unwrap();

        publish_asset(&id, &state, &ledger).unwrap();

        match &ledger.calls()[..] {
            [LedgerCall::CreateAsset(c)] => {
                assert_eq!(c.value, "₦1,200,000");
                assert_eq!(c.document_proof_url, "ipfs://not_provided");
            }
            other => panic!("unexpected calls {:?}", other),
        }

        assert!(matches!(
            publish_asset("asset_99", &state, &ledger),
            Err(AppError::AssetNotFound(_))
        ));
    }

    #[test]
    fn publish_party_routes_by_role_and_rejects_lawyer() {
        let td = tempdir().unwrap();
        let (state, _ctx, ledger) = mk_env(td.path());
        sign_in_demo(&state).unwrap();

        let b = save_party(&mk_party(PartyRole::Beneficiary), None, &state).unwrap();
        let w = save_party(&mk_party(PartyRole::Witness), None, &state).unwrap();

        publish_party(&b, &state, &ledger).unwrap();
        publish_party(&w, &state, &ledger).unwrap();
        assert!(matches!(
            publish_party(SEED_LAWYER_ID, &state, &ledger),
            Err(AppError::LawyerNotPublishable)
        ));

        let calls = ledger.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], LedgerCall::CreateBeneficiary(ref c) if c.signature == "N/A"));
        assert!(matches!(calls[1], LedgerCall::CreateWitness(_)));
    }

    #[test]
    fn gateway_error_is_verbatim() {
        let td = tempdir().unwrap();
        let (state, _ctx, ledger) = mk_env(td.path());
        sign_in_demo(&state).unwrap();
        let b = save_party(&mk_party(PartyRole::Beneficiary), None, &state).unwrap();

        ledger.fail_next(LedgerError::Network("node unreachable".into()));
        let err = publish_party(&b, &state, &ledger).unwrap_err();
        assert!(err.surfaces_verbatim());
        assert_eq!(err.to_string(), "node unreachable");
    }

    #[test]
    fn summary_counts_owned_objects_by_type() {
        let td = tempdir().unwrap();
        let (state, ctx, ledger) = mk_env(td.path());
        sign_in_demo(&state).unwrap();

        let empty = ledger_summary(&state, &ctx, &ledger).unwrap();
        assert_eq!(empty, LedgerSummary::default());
        assert_eq!(empty.will_status(), "Not Created");

        let b = save_party(&mk_party(PartyRole::Beneficiary), None, &state).unwrap();
        publish_party(&b, &state, &ledger).unwrap();

        let s = ledger_summary(&state, &ctx, &ledger).unwrap();
        assert_eq!(s.beneficiaries, 1);
        assert_eq!(s.assets, 0);
    }
}
