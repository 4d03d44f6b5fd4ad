//! Tenant home: visible APIs and the teams behind them.

use backoffice_client::BackofficeApi;
use backoffice_types::{Api, ApiVisibility, Team};
use serde_json::Value;
use tracing::{debug, info};

use super::update_team::update_team;
use super::{Result, WorkflowError};
use crate::context::ContextStore;
use crate::permissions::{self, Operation, Resource};

#[derive(Debug, Clone, Default)]
pub struct HomeData {
    pub apis: Vec<Api>,
    /// Every team of the tenant, used to resolve API owners.
    pub teams: Vec<Team>,
    /// Teams the connected user belongs to.
    pub my_teams: Vec<Team>,
}

impl HomeData {
    pub fn owner_of(&self, api: &Api) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == api.team)
    }

    /// The owning team of `api`, if the connected user is a member of it.
    pub fn admin_team_of(&self, api: &Api) -> Option<&Team> {
        self.my_teams.iter().find(|t| t.id == api.team)
    }
}

pub fn team_page_path(team: &Team) -> String {
    format!("/{}", team.human_readable_id)
}

/// Page of `api`, or `None` while it is neither public nor authorized for
/// any team. Falls back to the raw owner id when the owner is unknown.
pub fn api_page_path(api: &Api, teams: &[Team]) -> Option<String> {
    if api.visibility != ApiVisibility::Public && !api.any_authorized() {
        return None;
    }
    let owner = teams
        .iter()
        .find(|t| t.id == api.team)
        .map(|t| t.human_readable_id.as_str())
        .unwrap_or(api.team.as_str());
    Some(format!("/{}/{}", owner, api.human_readable_id))
}

/// Editor of `api`, under the team that owns it.
pub fn edit_api_path(team: &Team, api: &Api) -> String {
    format!(
        "/{}/settings/apis/{}/infos",
        team.human_readable_id, api.human_readable_id
    )
}

pub struct Home<'a, A: ?Sized> {
    api: &'a A,
    store: &'a ContextStore,
    data: HomeData,
}

impl<'a, A> Home<'a, A>
where
    A: BackofficeApi + ?Sized,
{
    pub fn new(api: &'a A, store: &'a ContextStore) -> Self {
        Self {
            api,
            store,
            data: HomeData::default(),
        }
    }

    pub fn data(&self) -> &HomeData {
        &self.data
    }

    pub async fn load(&mut self) -> Result<&HomeData> {
        let (apis, teams, my_teams) = tokio::try_join!(
            self.api.my_visible_apis(),
            self.api.teams(),
            self.api.my_teams(),
        )?;
        debug!(apis = apis.len(), teams = teams.len(), my_teams = my_teams.len(), "home loaded");

        self.data = HomeData {
            apis,
            teams,
            my_teams,
        };
        Ok(&self.data)
    }

    /// Request access to `api` for `team_ids`, then reload.
    pub async fn ask_for_api_access(&mut self, api: &Api, team_ids: &[String]) -> Result<Value> {
        let resp = self.api.ask_for_api_access(team_ids, &api.id).await?;
        info!(api = %api.id, teams = team_ids.len(), "api access requested");
        self.load().await?;
        Ok(resp)
    }

    pub fn open_team_page(&self, team: &Team) -> String {
        let path = team_page_path(team);
        self.store.navigate(path.clone());
        path
    }

    /// Navigates only when the API page is reachable.
    pub fn open_api_page(&self, api: &Api) -> Option<String> {
        let path = api_page_path(api, &self.data.teams)?;
        self.store.navigate(path.clone());
        Some(path)
    }

    /// Switch to the team owning `api` and open its editor.
    ///
    /// The connected user must manage APIs in that team; the team switch
    /// completes before navigating. Nothing is opened when a newer team
    /// update superseded the switch.
    pub async fn open_api_editor(&self, api: &Api) -> Result<String> {
        let user = self
            .store
            .snapshot()
            .connected_user
            .ok_or(WorkflowError::NotLoggedIn)?;
        let admin_team = self.data.admin_team_of(api);
        permissions::require(&user, Operation::Manage, Resource::Api, admin_team)?;
        let Some(team) = admin_team else {
            return Err(WorkflowError::NoTeamInScope);
        };

        if !update_team(self.api, self.store, team.clone()).await {
            debug!(team = %team.id, "team switch superseded, editor not opened");
            return Err(WorkflowError::Superseded {
                team: team.id.clone(),
            });
        }
        let path = edit_api_path(team, api);
        self.store.navigate(path.clone());
        Ok(path)
    }
}
