//! Notification endpoints, per team and for the connected user.

use backoffice_types::{NotificationPage, UnreadCount};
use serde_json::Value;
use tracing::warn;

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn team_all_notifications(
        &self,
        team_id: &str,
        page: u32,
    ) -> Result<NotificationPage> {
        self.get_query(
            &format!("/api/teams/{}/notifications/all", seg(team_id)),
            &[("page", page)],
        )
        .await
    }

    pub async fn team_notifications(&self, team_id: &str) -> Result<NotificationPage> {
        self.get(&format!("/api/teams/{}/notifications", seg(team_id)))
            .await
    }

    /// Unread badge of a team. Falls back to zero on any failure.
    pub async fn team_unread_notifications_count(&self, team_id: &str) -> UnreadCount {
        self.unread_count(&format!("/api/teams/{}/notifications/unread-count", seg(team_id)))
            .await
    }

    pub async fn my_all_notifications(&self, page: u32, page_size: u32) -> Result<NotificationPage> {
        self.get_query(
            "/api/me/notifications/all",
            &[("page", page), ("pageSize", page_size)],
        )
        .await
    }

    pub async fn my_notifications(&self, page: u32, page_size: u32) -> Result<NotificationPage> {
        self.get_query(
            "/api/me/notifications",
            &[("page", page), ("pageSize", page_size)],
        )
        .await
    }

    /// Unread badge of the connected user. Falls back to zero on any failure.
    pub async fn my_unread_notifications_count(&self) -> UnreadCount {
        self.unread_count("/api/me/notifications/unread-count").await
    }

    pub async fn accept_notification(&self, team_id: &str, notification_id: &str) -> Result<Value> {
        self.put_action(
            &format!(
                "/api/teams/{}/notifications/{}/accept",
                seg(team_id), seg(notification_id)
            ),
            super::NO_QUERY,
        )
        .await
    }

    pub async fn reject_notification(&self, team_id: &str, notification_id: &str) -> Result<Value> {
        self.put_action(
            &format!(
                "/api/teams/{}/notifications/{}/reject",
                seg(team_id), seg(notification_id)
            ),
            super::NO_QUERY,
        )
        .await
    }

    /// Only a 200 with a parseable body counts; everything else is zero.
    async fn unread_count(&self, path: &str) -> UnreadCount {
        let req = match self.request(reqwest::Method::GET, path) {
            Ok(req) => req,
            Err(e) => {
                warn!(path, error = %e, "unread count unavailable");
                return UnreadCount::default();
            }
        };

        let response = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(path, error = %e, "unread count unavailable");
                return UnreadCount::default();
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            warn!(path, status = %response.status(), "unread count unavailable");
            return UnreadCount::default();
        }

        match response.json::<UnreadCount>().await {
            Ok(count) => count,
            Err(e) => {
                warn!(path, error = %e, "unread count unreadable");
                UnreadCount::default()
            }
        }
    }
}
