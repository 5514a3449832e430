// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ooma_will_drafter_lib::{
    command,
    context::AppCtx,
    draft::{AssetForm, AssetId, PartyForm, PartyId, PartyRole},
    ledger::{
        CreateAssetCall, CreatePartyCall, CreateWillCall, LedgerError, LedgerGateway,
        MemoryLedger, OwnedObject, TxReceipt,
    },
    session::DEMO_WALLET_ADDRESS,
    types::AppState,
};

pub const TEST_PACKAGE: &str = "0xtest";

pub struct TestEnv {
    // Keep tempdir alive for the duration of the test.
    td: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
    pub ledger: Arc<MemoryLedger>,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self.td.path()
    }

    pub fn gateway(&self) -> Arc<dyn LedgerGateway> {
        self.ledger.clone()
    }

    /// Same data dir, fresh in-memory state: what the next launch sees.
    pub fn restart(self) -> TestEnv {
        let TestEnv { td, ctx, ledger, .. } = self;
        let state = AppState::new_for_tests(td.path()).expect("init_state after restart");
        TestEnv {
            td,
            state,
            ctx,
            ledger,
        }
    }

    pub fn with_seal_timeout(mut self, timeout: Duration) -> TestEnv {
        self.ctx = self.ctx.with_seal_timeout(timeout);
        self
    }
}

/// Fresh data dir and state, nobody signed in.
pub fn setup_signed_out() -> TestEnv {
    let td = tempfile::tempdir().expect("tempdir");

    let state = AppState::new_for_tests(td.path()).expect("init_state");
    let ctx = AppCtx::new(td.path().to_path_buf())
        .with_ledger_package(TEST_PACKAGE)
        .with_seal_timeout(Duration::from_secs(10));
    let ledger = Arc::new(MemoryLedger::new(DEMO_WALLET_ADDRESS, TEST_PACKAGE));

    TestEnv {
        td,
        state,
        ctx,
        ledger,
    }
}

/// Signed in through the demo stub and verified.
pub fn setup_verified() -> TestEnv {
    let env = setup_signed_out();
    command::sign_in_demo(&env.state).expect("sign_in_demo");
    command::verify_user(&env.state).expect("verify_user");
    env
}

pub fn lekki_form() -> AssetForm {
    AssetForm {
        asset_type: "Real Estate".to_string(),
        description: "Lekki Property".to_string(),
        value: "5000000".to_string(),
        document_proof_url: String::new(),
    }
}

pub fn person_form(name: &str, role: PartyRole) -> PartyForm {
    PartyForm {
        user_name: name.to_string(),
        relationship: "Daughter".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone_number: "08012345678".to_string(),
        user_role: role,
        ..PartyForm::default()
    }
}

/// Lekki asset + Jane Doe, both selected, seed lawyer assigned.
pub fn prepare_ready_draft(env: &TestEnv) -> (AssetId, PartyId) {
    let asset = command::save_asset(&lekki_form(), None, &env.state).expect("save asset");
    let jane = command::save_party(
        &person_form("Jane Doe", PartyRole::Beneficiary),
        None,
        &env.state,
    )
    .expect("save party");

    command::toggle_asset(&asset, &env.state).expect("toggle asset");
    command::toggle_beneficiary(&jane, &env.state).expect("toggle beneficiary");
    command::set_lawyer(Some("party_0".to_string()), &env.state).expect("set lawyer");

    (asset, jane)
}

/// Gateway whose `create_will` answers only after `delay`.
pub struct SlowLedger {
    pub inner: MemoryLedger,
    pub delay: Duration,
}

impl SlowLedger {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryLedger::new(DEMO_WALLET_ADDRESS, TEST_PACKAGE),
            delay,
        }
    }
}

impl LedgerGateway for SlowLedger {
    fn create_asset(&self, call: &CreateAssetCall) -> Result<TxReceipt, LedgerError> {
        self.inner.create_asset(call)
    }

    fn create_beneficiary(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError> {
        self.inner.create_beneficiary(call)
    }

    fn create_witness(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError> {
        self.inner.create_witness(call)
    }

    fn create_will(&self, call: &CreateWillCall) -> Result<TxReceipt, LedgerError> {
        std::thread::sleep(self.delay);
        self.inner.create_will(call)
    }

    fn owned_objects(
        &self,
        owner: &str,
        type_prefix: &str,
    ) -> Result<Vec<OwnedObject>, LedgerError> {
        self.inner.owned_objects(owner, type_prefix)
    }
}
