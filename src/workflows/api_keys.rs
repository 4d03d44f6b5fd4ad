//! Team API keys screen.

use backoffice_client::BackofficeApi;
use backoffice_types::{Api, Team, User};
use serde_json::Value;

use super::{Result, WorkflowError};
use crate::context::ContextStore;
use crate::permissions::{self, Operation, Resource};

/// Whether `user` may see the keys of `team`: always when the team does not
/// restrict them to administrators.
pub fn show_api_keys(user: &User, team: &Team) -> bool {
    user.is_daikoku_admin
        || !team.show_api_key_only_to_admins
        || permissions::is_team_admin(user, Some(team))
}

/// Location of the key list of `api` for `team`.
pub fn api_keys_path(team: &Team, api: &Api) -> String {
    format!(
        "/{}/settings/apikeys/{}",
        team.human_readable_id, api.human_readable_id
    )
}

/// Remove the archived subscriptions of the current team.
pub async fn clean_archived_subscriptions<A>(api: &A, store: &ContextStore) -> Result<Value>
where
    A: BackofficeApi + ?Sized,
{
    let ctx = store.snapshot();
    let user = ctx.connected_user.ok_or(WorkflowError::NotLoggedIn)?;
    let team = ctx.current_team.ok_or(WorkflowError::NoTeamInScope)?;
    permissions::require(&user, Operation::Manage, Resource::ApiKey, Some(&team))?;

    Ok(api.clean_archived_subscriptions(&team.id).await?)
}
