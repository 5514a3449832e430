// src/ledger/memory.rs

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::{Mutex, MutexGuard};

use super::{
    CreateAssetCall, CreatePartyCall, CreateWillCall, LedgerError, LedgerGateway, OwnedObject,
    TxReceipt, TYPE_ASSET, TYPE_BENEFICIARY, TYPE_WILL, TYPE_WITNESS,
};
use crate::context::LEDGER_MODULE;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LedgerCall {
    CreateAsset(CreateAssetCall),
    CreateBeneficiary(CreatePartyCall),
    CreateWitness(CreatePartyCall),
    CreateWill(CreateWillCall),
}

#[derive(Default)]
struct Inner {
    calls: Vec<LedgerCall>,
    objects: Vec<(String, OwnedObject)>,
    fail_next: Option<LedgerError>,
    seq: u64,
}

/// In-process ledger: every call is journaled, "signed" immediately, and mints
/// one object owned by the configured wallet address.
pub struct MemoryLedger {
    owner: String,
    package: String,
    inner: Mutex<Inner>,
}

impl MemoryLedger {
    pub fn new(owner: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            package: package.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Journal of accepted calls, oldest first.
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.lock().map(|g| g.calls.clone()).unwrap_or_default()
    }

    /// The next write call fails with `err` instead of executing.
    pub fn fail_next(&self, err: LedgerError) {
        if let Ok(mut g) = self.lock() {
            g.fail_next = Some(err);
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, LedgerError> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::Network("ledger state poisoned".to_string()))
    }

    fn execute(&self, call: LedgerCall, type_name: &str) -> Result<TxReceipt, LedgerError> {
        let mut g = self.lock()?;

        if let Some(err) = g.fail_next.take() {
            return Err(err);
        }

        g.seq = g.seq.saturating_add(1);

        let payload = serde_json::to_vec(&call)
            .map_err(|e| LedgerError::Rejected(format!("cannot encode call: {e}")))?;

        let mut h = Sha256::new();
        h.update(g.seq.to_be_bytes());
        h.update(&payload);
        let digest = h.finalize();

        let mut oh = Sha256::new();
        oh.update(b"object");
        oh.update(&digest);
        let object_id = format!("0x{}", hex::encode(oh.finalize()));

        let type_tag = format!("{}::{}::{}", self.package, LEDGER_MODULE, type_name);
        let owner = self.owner.clone();
        g.objects.push((
            owner,
            OwnedObject {
                object_id: object_id.clone(),
                type_tag,
            },
        ));
        g.calls.push(call);

        Ok(TxReceipt {
            digest: hex::encode(&digest),
            created: vec![object_id],
        })
    }
}

impl LedgerGateway for MemoryLedger {
    fn create_asset(&self, call: &CreateAssetCall) -> Result<TxReceipt, LedgerError> {
        self.execute(LedgerCall::CreateAsset(call.clone()), TYPE_ASSET)
    }

    fn create_beneficiary(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError> {
        self.execute(LedgerCall::CreateBeneficiary(call.clone()), TYPE_BENEFICIARY)
    }

    fn create_witness(&self, call: &CreatePartyCall) -> Result<TxReceipt, LedgerError> {
        self.execute(LedgerCall::CreateWitness(call.clone()), TYPE_WITNESS)
    }

    fn create_will(&self, call: &CreateWillCall) -> Result<TxReceipt, LedgerError> {
        self.execute(LedgerCall::CreateWill(call.clone()), TYPE_WILL)
    }

    fn owned_objects(
        &self,
        owner: &str,
        type_prefix: &str,
    ) -> Result<Vec<OwnedObject>, LedgerError> {
        let g = self.lock()?;
        Ok(g.objects
            .iter()
            .filter(|(o, obj)| o == owner && obj.type_tag.starts_with(type_prefix))
            .map(|(_, obj)| obj.clone())
            .collect())
    }
}

// ======================================================
// Unit Tests
// ======================================================
