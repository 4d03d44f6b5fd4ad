//! Reducer laws over generated session contexts.

use std::sync::Arc;

use backoffice::context::{reduce, reduce_raw, Action, Navigator, SessionContext};
use backoffice::types::{Team, Tenant, User};
use proptest::prelude::*;
use serde_json::json;

// -- Strategy helpers --

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn arb_user() -> impl Strategy<Value = User> {
    (arb_id(), any::<bool>(), any::<bool>()).prop_map(|(id, daikoku, tenant)| {
        let mut user = User::new(id.clone(), id.clone(), format!("{}@example.com", id));
        user.is_daikoku_admin = daikoku;
        user.is_tenant_admin = tenant;
        user
    })
}

fn arb_team() -> impl Strategy<Value = Team> {
    (arb_id(), arb_id()).prop_map(|(id, hrid)| Team::new(id, hrid))
}

fn arb_language() -> impl Strategy<Value = String> {
    prop_oneof![Just("En".to_string()), Just("Fr".to_string()), "[A-Z][a-z]"]
}

fn arb_context() -> impl Strategy<Value = SessionContext> {
    (
        proptest::option::of(arb_user()),
        proptest::option::of(arb_user()),
        proptest::option::of(arb_team()),
        0u64..1000,
        proptest::option::of(arb_id()),
        arb_language(),
    )
        .prop_map(|(impersonator, user, team, unread, tenant, language)| SessionContext {
            impersonator: impersonator.map(Arc::new),
            connected_user: user.map(Arc::new),
            current_team: team.map(Arc::new),
            unread_notifications_count: unread,
            tenant: tenant.map(|id| Arc::new(Tenant::new(id.clone(), id))),
            history: Some(Navigator::new()),
            current_language: Arc::from(language.as_str()),
        })
}

/// Both absent, or both pointing at the same allocation.
fn same<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

proptest! {
    #[test]
    fn logout_keeps_only_history(state in arb_context()) {
        let out = reduce(&state, Action::Logout);
        prop_assert_eq!(out, SessionContext::with_history(state.history.clone()));
    }

    #[test]
    fn update_notifs_changes_only_the_count(state in arb_context(), count in any::<u64>()) {
        let out = reduce(&state, Action::update_notifs(count));
        prop_assert_eq!(out.unread_notifications_count, count);
        prop_assert!(same(&out.connected_user, &state.connected_user));
        prop_assert!(same(&out.current_team, &state.current_team));
        prop_assert!(same(&out.tenant, &state.tenant));
        prop_assert!(same(&out.impersonator, &state.impersonator));
        prop_assert!(Arc::ptr_eq(&out.current_language, &state.current_language));
        prop_assert_eq!(
            SessionContext { unread_notifications_count: state.unread_notifications_count, ..out },
            state
        );
    }

    #[test]
    fn impersonate_changes_only_the_impersonator(state in arb_context(), admin in proptest::option::of(arb_user())) {
        let out = reduce(&state, Action::impersonate(admin.clone()));
        prop_assert_eq!(out.impersonator.as_deref(), admin.as_ref());
        prop_assert_eq!(
            SessionContext { impersonator: state.impersonator.clone(), ..out },
            state
        );
    }

    #[test]
    fn login_resets_impersonation_and_count(
        state in arb_context(),
        user in arb_user(),
        team in proptest::option::of(arb_team()),
        language in arb_language(),
    ) {
        let out = reduce(&state, Action::login(user.clone(), team.clone(), None, language.as_str()));
        prop_assert_eq!(out.connected_user.as_deref(), Some(&user));
        prop_assert_eq!(out.current_team.as_deref(), team.as_ref());
        prop_assert!(out.impersonator.is_none());
        prop_assert_eq!(out.unread_notifications_count, 0);
        prop_assert_eq!(&*out.current_language, language.as_str());
        prop_assert_eq!(out.history, state.history);
    }

    #[test]
    fn unknown_raw_actions_change_nothing(state in arb_context(), kind in "[A-Z_]{3,12}") {
        prop_assume!(Action::from_raw(&json!({ "type": kind.clone() })).is_none());
        let out = reduce_raw(&state, &json!({ "type": kind }));
        prop_assert_eq!(out, state);
    }
}
