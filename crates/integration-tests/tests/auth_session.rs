//! End-to-end session behavior over file-backed stores.
//!
//! Each test opens fresh service instances against the same temporary
//! data directory to mirror the admin surface being closed and
//! reopened.

#![allow(clippy::unwrap_used)]

use portico_cms::AuthError;
use portico_integration_tests::TestContext;

#[test]
fn login_survives_service_restart() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    assert!(!auth.is_authenticated());
    auth.login("admin", "peterl123").unwrap();

    // A brand-new service over the same directory restores the session.
    let reopened = ctx.auth();
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.current_user().unwrap().username, "admin");
}

#[test]
fn logout_clears_durable_session() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    auth.login("admin", "peterl123").unwrap();
    auth.logout();

    let reopened = ctx.auth();
    assert!(!reopened.is_authenticated());
    assert!(reopened.current_user().is_none());
}

#[test]
fn failed_login_leaves_no_session() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    assert_eq!(
        auth.login("admin", "wrong").unwrap_err(),
        AuthError::InvalidCredentials
    );

    let reopened = ctx.auth();
    assert!(!reopened.is_authenticated());
}

#[test]
fn password_rotation_is_durable() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    auth.login("admin", "peterl123").unwrap();
    auth.change_password("peterl123", "rotated-pw-9").unwrap();

    // The rotated credential record is now on disk.
    assert!(ctx.records_dir().join("admin_credentials.json").exists());

    // Bootstrap password no longer works, the rotated one does.
    let mut reopened = ctx.auth();
    reopened.logout();
    assert_eq!(
        reopened.login("admin", "peterl123").unwrap_err(),
        AuthError::InvalidCredentials
    );
    reopened.login("admin", "rotated-pw-9").unwrap();
    assert!(reopened.is_authenticated());
}

#[test]
fn rotation_requires_the_current_password() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    auth.login("admin", "peterl123").unwrap();
    assert_eq!(
        auth.change_password("nope", "whatever").unwrap_err(),
        AuthError::CurrentPasswordIncorrect
    );

    // The bootstrap password still works afterwards.
    let mut reopened = ctx.auth();
    reopened.logout();
    reopened.login("admin", "peterl123").unwrap();
}

#[test]
fn corrupt_session_jar_means_logged_out() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    auth.login("admin", "peterl123").unwrap();

    std::fs::write(ctx.session_path(), "{{{ not json").unwrap();

    // The corrupt jar reads as empty, and logging in again recovers.
    let mut reopened = ctx.auth();
    assert!(!reopened.is_authenticated());
    reopened.login("admin", "peterl123").unwrap();
    assert!(ctx.auth().is_authenticated());
}

#[test]
fn deleting_the_jar_logs_out() {
    let ctx = TestContext::new();

    let mut auth = ctx.auth();
    auth.login("admin", "peterl123").unwrap();
    std::fs::remove_file(ctx.session_path()).unwrap();

    assert!(!ctx.auth().is_authenticated());
}
