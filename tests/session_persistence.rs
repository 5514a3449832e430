// tests/session_persistence.rs

mod common;

use ooma_will_drafter_lib::{
    activity_log::{recent_activity, ActivityClass},
    command,
    context::SESSION_FILE_NAME,
    route::{apply_route_guards, Route},
    session::User,
    wizard::WizardStep,
};

use common::{setup_signed_out, setup_verified};

#[test]
fn login_survives_restart() {
    let env = setup_signed_out();
    command::sign_in_demo(&env.state).expect("sign in");

    let env = env.restart();

    let u = command::current_user(&env.state)
        .unwrap()
        .expect("user restored on restart");
    assert_eq!(u.id, 1);
    assert_eq!(u.name, "Kayode");
    assert_eq!(u.avatar_initial, "K");
    assert!(!u.is_verified);
}

#[test]
fn verification_survives_restart_and_is_idempotent() {
    let env = setup_verified();
    command::verify_user(&env.state).unwrap();

    let env = env.restart();
    assert!(command::route_ctx(&env.state).verified);

    let raw = std::fs::read_to_string(env.data_dir().join(SESSION_FILE_NAME)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["isVerified"], serde_json::Value::Bool(true));
    assert_eq!(v["avatarInitial"], "K");
}

#[test]
fn logout_clears_disk_and_restart_stays_signed_out() {
    let env = setup_verified();
    command::logout(&env.state).unwrap();
    assert!(!env.data_dir().join(SESSION_FILE_NAME).exists());

    // logging out twice is harmless
    command::logout(&env.state).unwrap();

    let env = env.restart();
    assert!(command::current_user(&env.state).unwrap().is_none());
}

#[test]
fn login_replaces_previous_user() {
    let env = setup_verified();

    let other = User::new(42, "ada", "0xabc").with_email("ada@example.com");
    command::login(other, &env.state).unwrap();

    let env = env.restart();
    let u = command::current_user(&env.state).unwrap().unwrap();
    assert_eq!(u.id, 42);
    assert_eq!(u.avatar_initial, "A");
    assert_eq!(u.email.as_deref(), Some("ada@example.com"));
    assert!(!u.is_verified);
}

#[test]
fn corrupt_session_starts_signed_out_and_is_logged() {
    let env = setup_signed_out();
    std::fs::write(env.data_dir().join(SESSION_FILE_NAME), b"{ not json").unwrap();

    let env = env.restart();

    assert!(command::current_user(&env.state).unwrap().is_none());
    assert!(recent_activity(&env.state)
        .iter()
        .any(|e| e.class == ActivityClass::Storage && e.kind == "session_unreadable"));

    // the file is left for the next login to overwrite
    assert!(env.data_dir().join(SESSION_FILE_NAME).exists());
    command::sign_in_demo(&env.state).unwrap();

    let env = env.restart();
    assert!(command::current_user(&env.state).unwrap().is_some());
}

#[test]
fn guards_follow_session_state() {
    let env = setup_signed_out();
    let wizard = Route::CreateWill(WizardStep::Assets);

    assert_eq!(
        apply_route_guards(command::route_ctx(&env.state), wizard),
        Route::Auth
    );

    command::sign_in_demo(&env.state).unwrap();
    assert_eq!(
        apply_route_guards(command::route_ctx(&env.state), wizard),
        Route::Profile
    );
    assert_eq!(
        apply_route_guards(command::route_ctx(&env.state), Route::Auth),
        Route::Dashboard
    );

    command::verify_user(&env.state).unwrap();
    assert_eq!(
        apply_route_guards(command::route_ctx(&env.state), wizard),
        wizard
    );
}
