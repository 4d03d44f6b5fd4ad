//! Switching the current team.

use backoffice_client::BackofficeApi;
use backoffice_types::Team;

use crate::context::{Action, ContextStore};

/// Make `team` the current team, with its unread notification count.
///
/// The count never fails (it falls back to zero). Returns `false` when the
/// store's stale guard dropped this update because a newer one landed first.
pub async fn update_team<A>(api: &A, store: &ContextStore, team: Team) -> bool
where
    A: BackofficeApi + ?Sized,
{
    let ticket = store.ticket();
    let unread = api.team_unread_notifications_count(&team.id).await;
    store.dispatch_if_current(ticket, Action::update_team(Some(team), unread.count))
}
