//! Team assets, tenant assets and thumbnails.
//!
//! Uploads are raw bytes; the content type travels in `Content-Type` and is
//! repeated in `Asset-Content-Type` for the asset store.

use serde_json::Value;

use super::{HttpClient, NO_QUERY, seg};
use crate::Result;

const PNG: &str = "image/png";

/// A new asset and its metadata.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl HttpClient {
    pub async fn asset(&self, team_id: &str, asset_id: &str) -> Result<Value> {
        self.get(&format!("/api/teams/{}/assets/{}", seg(team_id), seg(asset_id)))
            .await
    }

    pub async fn list_assets(&self, team_id: &str) -> Result<Vec<Value>> {
        self.get(&format!("/api/teams/{}/assets", seg(team_id))).await
    }

    pub async fn store_asset(&self, team_id: &str, upload: AssetUpload) -> Result<Value> {
        self.upload(&format!("/api/teams/{}/assets", seg(team_id)), upload)
            .await
    }

    pub async fn update_asset(
        &self,
        team_id: &str,
        asset_id: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Value> {
        self.replace_bytes(
            &format!("/api/teams/{}/assets/{}/_replace", seg(team_id), seg(asset_id)),
            content_type,
            bytes,
        )
        .await
    }

    pub async fn delete_asset(&self, team_id: &str, asset_id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/{}/assets/{}", seg(team_id), seg(asset_id)))
            .await
    }

    // ── Tenant assets ──────────────────────────────────────────

    pub async fn tenant_asset(&self, asset_id: &str) -> Result<Value> {
        self.get(&format!("/tenant-assets/{}", seg(asset_id))).await
    }

    /// Every tenant asset, or those uploaded on behalf of `team_id`.
    pub async fn list_tenant_assets(&self, team_id: Option<&str>) -> Result<Vec<Value>> {
        match team_id {
            Some(team_id) => {
                self.get_query("/tenant-assets", &[("teamId", team_id)])
                    .await
            }
            None => self.get("/tenant-assets").await,
        }
    }

    pub async fn store_tenant_asset(&self, upload: AssetUpload) -> Result<Value> {
        self.upload("/tenant-assets", upload).await
    }

    pub async fn update_tenant_asset(
        &self,
        asset_id: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Value> {
        self.replace_bytes(
            &format!("/tenant-assets/{}/_replace", seg(asset_id)),
            content_type,
            bytes,
        )
        .await
    }

    pub async fn delete_tenant_asset(&self, asset_id: &str) -> Result<Value> {
        self.delete(&format!("/tenant-assets/{}", seg(asset_id))).await
    }

    async fn upload(&self, path: &str, upload: AssetUpload) -> Result<Value> {
        let AssetUpload {
            filename,
            title,
            description,
            content_type,
            bytes,
        } = upload;
        let query = [
            ("filename", filename.as_str()),
            ("title", title.as_str()),
            ("desc", description.as_str()),
        ];
        self.post_bytes(path, &query, &content_type, true, bytes)
            .await
    }

    /// Store a PNG thumbnail under `id`.
    pub async fn store_thumbnail(&self, id: &str, png: Vec<u8>) -> Result<Value> {
        self.post_bytes(&format!("/asset-thumbnails/{}", seg(id)), NO_QUERY, PNG, true, png)
            .await
    }
}
