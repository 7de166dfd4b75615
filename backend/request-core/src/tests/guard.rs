// Unit tests for the route guard.

use crate::LOGIN_LOCATION;
use crate::guard::{GuardDecision, SessionGuard};
use crate::navigation::{Navigator, RecordingNavigator};
use crate::session::{MemoryTokenStore, TokenStore};

use common::RedactedToken;

use std::sync::Arc;

fn guard_setup() -> (SessionGuard, Arc<MemoryTokenStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let guard = SessionGuard::new(
        Arc::clone(&store) as Arc<dyn TokenStore>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    (guard, store, navigator)
}

#[test]
fn given_stored_token_when_navigating_then_protected_content_renders() {
    let (guard, store, navigator) = guard_setup();
    store.set(RedactedToken::new("abc"));

    let rendered = guard.render(|| "dashboard");

    assert_eq!(guard.evaluate(), GuardDecision::Allowed);
    assert_eq!(rendered, Some("dashboard"));
    assert!(navigator.visited().is_empty());
}

/// **VALUE**: Verifies protected content is never even built when logged
/// out.
///
/// **WHY THIS MATTERS**: "Render the login page instead" is not enough -
/// mounting protected content for an instant leaks data. The closure must
/// not run at all.
#[test]
fn given_no_session_when_navigating_then_redirected_and_content_never_built() {
    let (guard, _store, navigator) = guard_setup();

    let mut built = false;
    let rendered = guard.render(|| {
        built = true;
        "dashboard"
    });

    assert_eq!(rendered, None);
    assert!(!built, "protected content must not be materialized");
    assert_eq!(navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

/// Decisions are per-navigation, never cached: logging in between two
/// attempts flips the outcome.
#[test]
fn given_login_between_navigations_when_reevaluated_then_decision_flips() {
    let (guard, store, _navigator) = guard_setup();

    assert_eq!(guard.evaluate(), GuardDecision::Redirected);

    store.set(RedactedToken::new("abc"));

    assert_eq!(guard.evaluate(), GuardDecision::Allowed);
}

#[test]
fn given_repeated_logged_out_navigations_then_single_observable_target() {
    let (guard, _store, navigator) = guard_setup();

    guard.evaluate();
    guard.evaluate();
    guard.evaluate();

    assert_eq!(navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

#[test]
fn given_custom_login_location_when_redirected_then_it_is_used() {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let guard = SessionGuard::new(
        store as Arc<dyn TokenStore>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    )
    .with_login_location("/signin");

    guard.evaluate();

    assert_eq!(navigator.visited(), vec![String::from("/signin")]);
}
