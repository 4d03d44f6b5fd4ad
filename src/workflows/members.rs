//! Team members administration.
//!
//! Rules:
//! - a team keeps at least one `Administrator`: the last one can be neither
//!   removed nor demoted
//! - only team administrators change permissions
//! - toggling a permission the member already holds demotes them to `User`
//! - personal teams have no member management

use std::sync::Arc;

use backoffice_client::BackofficeApi;
use backoffice_types::{ActionResponse, Team, TeamPermission, User};
use tracing::{debug, info};

use super::update_team::update_team;
use super::{Result, WorkflowError};
use crate::context::ContextStore;
use crate::permissions::{self, CapabilityDenied, Operation, Resource};

/// Members of the current team and the users that could join it.
#[derive(Debug, Clone, Default)]
pub struct MemberRoster {
    pub members: Vec<User>,
    pub addable: Vec<User>,
}

pub struct TeamMembers<'a, A: ?Sized> {
    api: &'a A,
    store: &'a ContextStore,
}

impl<'a, A> TeamMembers<'a, A>
where
    A: BackofficeApi + ?Sized,
{
    pub fn new(api: &'a A, store: &'a ContextStore) -> Self {
        Self { api, store }
    }

    fn current_team(&self) -> Result<Arc<Team>> {
        self.store
            .snapshot()
            .current_team
            .ok_or(WorkflowError::NoTeamInScope)
    }

    fn connected_user(&self) -> Result<Arc<User>> {
        self.store
            .snapshot()
            .connected_user
            .ok_or(WorkflowError::NotLoggedIn)
    }

    /// The connected user must be allowed to manage the current team.
    fn require_manage(&self, team: &Team) -> Result<()> {
        let user = self.connected_user()?;
        permissions::require(&user, Operation::Manage, Resource::Team, Some(team))?;
        Ok(())
    }

    pub async fn load(&self) -> Result<MemberRoster> {
        let team = self.current_team()?;
        if team.is_personal() {
            self.store.navigate("/settings/me");
            return Err(WorkflowError::PersonalTeam);
        }

        let (members, addable) = tokio::try_join!(
            self.api.members(&team.id),
            self.api.addable_users_for_team(&team.id),
        )?;
        debug!(team = %team.id, members = members.len(), addable = addable.len(), "members loaded");

        Ok(MemberRoster { members, addable })
    }

    /// Daikoku administrator, or `Administrator` of the current team.
    pub fn is_admin(&self, user: &User) -> bool {
        let team = self.store.snapshot().current_team;
        permissions::is_team_admin(user, team.as_deref())
    }

    pub fn has_permission(&self, user: &User, permission: TeamPermission) -> bool {
        self.store
            .snapshot()
            .current_team
            .and_then(|team| team.permission_of(&user.id))
            == Some(permission)
    }

    /// Administrators of the current team; zero without a team in scope.
    pub fn admin_count(&self) -> usize {
        self.store
            .snapshot()
            .current_team
            .map_or(0, |team| team.admin_count())
    }

    pub async fn remove_member(&self, member: &User) -> Result<()> {
        let team = self.current_team()?;
        self.require_manage(&team)?;

        if self.is_admin(member) && team.admin_count() == 1 {
            return Err(WorkflowError::LastAdministrator {
                user: member.name.clone(),
            });
        }

        let resp = self.api.remove_member_from_team(&team.id, &member.id).await?;
        self.settle(resp).await?;
        info!(team = %team.id, member = %member.id, "member removed");
        Ok(())
    }

    pub async fn add_member(&self, user: &User) -> Result<()> {
        let team = self.current_team()?;
        self.require_manage(&team)?;

        let resp = self
            .api
            .add_members_to_team(&team.id, &[user.id.clone()])
            .await?;
        self.settle(resp).await?;
        info!(team = %team.id, member = %user.id, "member added");
        Ok(())
    }

    /// Grant `permission`, or fall back to `User` if the member already holds
    /// it. Returns the permission sent to the server.
    pub async fn toggle_permission(
        &self,
        member: &User,
        permission: TeamPermission,
    ) -> Result<TeamPermission> {
        let team = self.current_team()?;
        let connected = self.connected_user()?;

        if !self.is_admin(&connected) {
            return Err(CapabilityDenied {
                user: connected.id.clone(),
                operation: Operation::Manage,
                resource: Resource::Team,
                team: Some(team.id.clone()),
            }
            .into());
        }

        if self.has_permission(member, TeamPermission::Administrator) && team.admin_count() == 1 {
            return Err(WorkflowError::LastAdministrator {
                user: member.name.clone(),
            });
        }

        let new_permission = if self.has_permission(member, permission) {
            TeamPermission::User
        } else {
            permission
        };

        let resp = self
            .api
            .update_team_member_permission(&team.id, &[member.id.clone()], new_permission)
            .await?;
        self.settle(resp).await?;
        info!(team = %team.id, member = %member.id, permission = %new_permission, "permission changed");
        Ok(new_permission)
    }

    pub async fn update_api_keys_visibility(&self, only_for_admins: bool) -> Result<()> {
        let team = self.current_team()?;
        self.require_manage(&team)?;

        let resp = self
            .api
            .update_api_keys_visibility(&team.id, only_for_admins)
            .await?;
        update_team(self.api, self.store, resp.team).await;
        Ok(())
    }

    /// The server sends the updated team even when it refuses; the store
    /// takes it either way.
    async fn settle(&self, resp: ActionResponse) -> Result<()> {
        let ActionResponse {
            done, team, error, ..
        } = resp;
        if let Some(team) = team {
            update_team(self.api, self.store, team).await;
        }
        if done {
            Ok(())
        } else {
            Err(WorkflowError::Refused { reason: error })
        }
    }
}

/// Members whose name or email contains `search`, case-insensitively.
/// An empty search keeps everyone.
pub fn filter_members<'m>(members: &'m [User], search: &str) -> Vec<&'m User> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|m| {
            [&m.name, &m.email]
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}
