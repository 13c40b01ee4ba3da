//! Login, logout, restore, and persistence tests for the session container.

mod support;

use pretty_assertions::assert_eq;
use rstest::rstest;

use amparo_client::RecordStore;
use amparo_client::stub::StubStore;
use amparo_store::{SessionStore, SessionVault};

use support::employee_json;

fn seeded_stub() -> StubStore {
    let stub = StubStore::spawn().expect("stub");
    stub.seed(
        "funcionarios",
        vec![employee_json("f1", "sandra@x.com", "right")],
    );
    stub
}

fn session(stub: &StubStore, dir: &std::path::Path) -> SessionStore {
    SessionStore::new(
        RecordStore::new(stub.url()).staff(),
        SessionVault::file_only(dir),
    )
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let stub = seeded_stub();
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut session = session(&stub, tmp.path());

    assert!(!session.login("sandra@x.com", "wrong").await);

    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
    assert_eq!(session.error(), Some("invalid email or password"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn login_with_matching_credentials_persists_the_session() {
    let stub = seeded_stub();
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut session = session(&stub, tmp.path());

    assert!(session.login("sandra@x.com", "right").await);

    assert!(session.is_authenticated());
    let identity = session.identity().expect("identity");
    assert_eq!(identity.email, "sandra@x.com");
    assert_eq!(identity.id, "f1");
    assert!(session.error().is_none());

    // The side channel now holds both keys.
    let vault = SessionVault::file_only(tmp.path());
    let persisted = vault.load().expect("persisted identity");
    assert_eq!(persisted.email, "sandra@x.com");
}

#[tokio::test]
async fn logout_clears_the_side_channel() {
    let stub = seeded_stub();
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut first = session(&stub, tmp.path());
    assert!(first.login("sandra@x.com", "right").await);

    first.logout();
    assert!(!first.is_authenticated());
    assert!(first.identity().is_none());

    let mut fresh = session(&stub, tmp.path());
    assert!(!fresh.restore());
    assert!(!fresh.is_authenticated());
}

#[tokio::test]
async fn restore_trusts_the_side_channel_without_a_round_trip() {
    let stub = seeded_stub();
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut first = session(&stub, tmp.path());
    assert!(first.login("sandra@x.com", "right").await);
    let hits_after_login = stub.hits();

    let mut fresh = session(&stub, tmp.path());
    assert!(fresh.restore());
    assert!(fresh.is_authenticated());
    assert_eq!(
        fresh.identity().expect("identity").email,
        "sandra@x.com"
    );
    assert_eq!(stub.hits(), hits_after_login, "restore must not hit the store");
}

#[rstest]
#[case("", "whatever")]
#[case("sandra@x.com", "")]
#[case("sandra@x.com", "abc")]
#[tokio::test]
async fn login_form_validation_short_circuits(#[case] email: &str, #[case] password: &str) {
    let stub = StubStore::spawn().expect("stub");
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut session = session(&stub, tmp.path());

    assert!(!session.login(email, password).await);

    assert!(session.error().is_some());
    assert_eq!(stub.hits(), 0, "validation failures issue no request");
}

#[tokio::test]
async fn transport_failure_reads_as_invalid_credentials() {
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut session = SessionStore::new(
        RecordStore::new("http://127.0.0.1:9").staff(),
        SessionVault::file_only(tmp.path()),
    );

    assert!(!session.login("sandra@x.com", "right").await);

    assert!(!session.is_authenticated());
    assert_eq!(session.error(), Some("invalid email or password"));
}
