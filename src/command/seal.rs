// src/command/seal.rs

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::activity_log::{record_activity, ActivityClass};
use crate::command_state::*;
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::ledger::{CreateWillCall, LedgerError, LedgerGateway, TxReceipt};
use crate::types::AppState;
use crate::wizard::build_create_will_call;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealReceipt {
    pub digest: String,
    pub created: Vec<String>,
    pub sealed_at: DateTime<Utc>,
}

/// One submitted `create_will` call. Dropping the ticket discards whatever
/// the worker reports later.
pub struct SealTicket {
    rx: Receiver<Result<TxReceipt, LedgerError>>,
    started: Instant,
    deadline: Instant,
    timeout: Duration,
    request: CreateWillCall,
}

impl SealTicket {
    pub fn request(&self) -> &CreateWillCall {
        &self.request
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[derive(Debug)]
pub enum SealPoll {
    Pending,
    Sealed(SealReceipt),
    Failed(AppError),
}

/// Validates the draft and hands the single `create_will` call to a worker.
/// Nothing in the draft changes until `poll_seal` reports success.
pub fn begin_seal(
    agreed: bool,
    state: &AppState,
    ctx: &AppCtx,
    gateway: Arc<dyn LedgerGateway>,
) -> AppResult<SealTicket> {
    require_user(state)?;

    let mut seal = lock_seal(state)?;
    if seal.in_flight {
        return Err(AppError::SealInFlight);
    }

    let call = build_create_will_call(&*lock_draft(state)?, agreed)?;

    let started = Instant::now();
    let deadline = started
        .checked_add(ctx.seal_timeout)
        .ok_or(AppError::SealTimeoutTooLarge {
            secs: ctx.seal_timeout.as_secs(),
        })?;

    let (tx, rx) = mpsc::channel();
    let worker_call = call.clone();
    thread::Builder::new()
        .name("seal-worker".to_string())
        .spawn(move || {
            let res = gateway.create_will(&worker_call);
            // receiver gone means the attempt was abandoned
            let _ = tx.send(res);
        })?;

    seal.in_flight = true;
    drop(seal);

    log::info!(
        "seal: submitted will with {} asset(s), {} beneficiary(ies)",
        call.asset_ids.len(),
        call.beneficiary_ids.len()
    );
    record_activity(state, ActivityClass::Seal, "begin_seal", "submitted", "");

    Ok(SealTicket {
        rx,
        started,
        deadline,
        timeout: ctx.seal_timeout,
        request: call,
    })
}

/// Non-blocking; call once per frame until it stops returning `Pending`.
pub fn poll_seal(ticket: &SealTicket, state: &AppState) -> SealPoll {
    match ticket.rx.try_recv() {
        Ok(Ok(receipt)) => finish_sealed(receipt, state),

        Ok(Err(e)) => {
            clear_in_flight(state);
            log::warn!("seal: gateway failed: {e}");
            record_activity(state, ActivityClass::Seal, "poll_seal", "failed", &e.to_string());
            SealPoll::Failed(AppError::Ledger(e))
        }

        Err(TryRecvError::Empty) if Instant::now() >= ticket.deadline => {
            clear_in_flight(state);
            let secs = ticket.timeout.as_secs();
            log::warn!("seal: no answer after {secs}s");
            record_activity(
                state,
                ActivityClass::Seal,
                "poll_seal",
                "timed_out",
                &format!("{secs}s"),
            );
            SealPoll::Failed(AppError::SealTimedOut { secs })
        }

        Err(TryRecvError::Empty) => SealPoll::Pending,

        Err(TryRecvError::Disconnected) => {
            clear_in_flight(state);
            record_activity(state, ActivityClass::Seal, "poll_seal", "worker_gone", "");
            SealPoll::Failed(AppError::SealWorkerGone)
        }
    }
}

/// Blocks the calling thread until the ticket resolves.
pub fn wait_for_seal(ticket: &SealTicket, state: &AppState) -> AppResult<SealReceipt> {
    loop {
        match poll_seal(ticket, state) {
            SealPoll::Pending => thread::sleep(POLL_INTERVAL),
            SealPoll::Sealed(r) => return Ok(r),
            SealPoll::Failed(e) => return Err(e),
        }
    }
}

fn finish_sealed(receipt: TxReceipt, state: &AppState) -> SealPoll {
    clear_in_flight(state);

    match lock_draft(state) {
        Ok(mut draft) => draft.reset_will(),
        Err(e) => log::warn!("seal: sealed but draft could not be reset: {e}"),
    }

    log::info!("seal: will sealed, digest={}", receipt.digest);
    record_activity(
        state,
        ActivityClass::Seal,
        "poll_seal",
        "sealed",
        &format!("digest={}", receipt.digest),
    );

    SealPoll::Sealed(SealReceipt {
        digest: receipt.digest,
        created: receipt.created,
        sealed_at: Utc::now(),
    })
}

fn clear_in_flight(state: &AppState) {
    if let Ok(mut seal) = lock_seal(state) {
        seal.in_flight = false;
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{
        save_asset, save_party, set_lawyer, sign_in_demo, toggle_asset, toggle_beneficiary,
    };
    use crate::draft::{AssetForm, PartyForm, PartyRole, SEED_LAWYER_ID};
    use crate::ledger::MemoryLedger;
    use crate::session::DEMO_WALLET_ADDRESS;
    use crate::wizard::{SealRequirement, ValidationError};
    use tempfile::tempdir;

    fn mk_ready(dir: &std::path::Path) -> (AppState, AppCtx, Arc<MemoryLedger>) {
        let state = AppState::new_for_tests(dir).expect("state");
        let ctx = AppCtx::new(dir.to_path_buf()).with_seal_timeout(Duration::from_secs(5));
        let ledger = Arc::new(MemoryLedger::new(DEMO_WALLET_ADDRESS, "0x0"));

        sign_in_demo(&state).unwrap();
        let a = save_asset(
            &AssetForm {
                asset_type: "Cash".into(),
                description: "Savings".into(),
                value: "10".into(),
                document_proof_url: String::new(),
            },
            None,
            &state,
        )
        .unwrap();
        let b = save_party(
            &PartyForm {
                user_name: "Jane".into(),
                relationship: "Daughter".into(),
                email: "j@example.com".into(),
                phone_number: "1".into(),
                user_role: PartyRole::Beneficiary,
                ..PartyForm::default()
            },
            None,
            &state,
        )
        .unwrap();
        toggle_asset(&a, &state).unwrap();
        toggle_beneficiary(&b, &state).unwrap();
        set_lawyer(Some(SEED_LAWYER_ID.to_string()), &state).unwrap();

        (state, ctx, ledger)
    }

    #[test]
    fn validation_failure_submits_nothing() {
        let td = tempdir().unwrap();
        let (state, ctx, ledger) = mk_ready(td.path());

        let err = match begin_seal(false, &state, &ctx, ledger.clone()) {
            Err(e) => e,
            Ok(_) => panic!("expected validation error"),
        };
        match err {
            AppError::Validation(ValidationError::Unmet { missing, .. }) => {
                assert_eq!(missing, vec![SealRequirement::Agreement]);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(!seal_in_flight(&state));
        assert!(ledger.calls().is_empty());
        assert_eq!(state.draft.lock().unwrap().selected_asset_ids().len(), 1);
    }

    #[test]
    fn second_submission_is_refused_while_in_flight() {
        let td = tempdir().unwrap();
        let (state, ctx, ledger) = mk_ready(td.path());

        let ticket = begin_seal(true, &state, &ctx, ledger.clone()).unwrap();
        assert!(matches!(
            begin_seal(true, &state, &ctx, ledger.clone()),
            Err(AppError::SealInFlight)
        ));

        wait_for_seal(&ticket, &state).unwrap();
        assert!(!seal_in_flight(&state));
    }

    #[test]
    fn unrepresentable_deadline_is_refused_before_submitting() {
        let td = tempdir().unwrap();
        let (state, ctx, ledger) = mk_ready(td.path());
        let ctx = ctx.with_seal_timeout(Duration::MAX);

        match begin_seal(true, &state, &ctx, ledger.clone()) {
            Err(AppError::SealTimeoutTooLarge { secs }) => assert_eq!(secs, u64::MAX),
            Err(other) => panic!("unexpected {:?}", other),
            Ok(_) => panic!("expected SealTimeoutTooLarge"),
        }

        assert!(!seal_in_flight(&state));
        thread::sleep(Duration::from_millis(50));
        assert!(ledger.calls().is_empty());

        // a sane timeout still seals afterwards
        let ctx = ctx.with_seal_timeout(Duration::from_secs(5));
        let ticket = begin_seal(true, &state, &ctx, ledger.clone()).unwrap();
        wait_for_seal(&ticket, &state).unwrap();
        assert_eq!(ledger.calls().len(), 1);
    }

    #[test]
    fn success_resets_draft() {
        let td = tempdir().unwrap();
        let (state, ctx, ledger) = mk_ready(td.path());

        let ticket = begin_seal(true, &state, &ctx, ledger.clone()).unwrap();
        assert_eq!(ticket.request().lawyer_id, SEED_LAWYER_ID);

        let receipt = wait_for_seal(&ticket, &state).unwrap();
        assert_eq!(receipt.digest.len(), 64);

        let d = state.draft.lock().unwrap();
        assert!(d.assets().is_empty());
        assert!(d.selected_beneficiary_ids().is_empty());
        assert_eq!(d.parties().len(), 1);
    }
}
