//! Tenant endpoints.

use backoffice_types::Tenant;
use serde_json::Value;

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn all_tenants(&self) -> Result<Vec<Tenant>> {
        self.get("/api/tenants").await
    }

    pub async fn one_tenant(&self, tenant_id: &str) -> Result<Tenant> {
        self.get(&format!("/api/tenants/{}", seg(tenant_id))).await
    }

    pub async fn create_tenant(&self, tenant: &Tenant) -> Result<Tenant> {
        self.post("/api/tenants", tenant).await
    }

    pub async fn save_tenant(&self, tenant: &Tenant) -> Result<Tenant> {
        self.put(&format!("/api/tenants/{}", seg(&tenant.id)), tenant)
            .await
    }

    pub async fn delete_tenant(&self, tenant_id: &str) -> Result<Value> {
        self.delete(&format!("/api/tenants/{}", seg(tenant_id))).await
    }

    /// Id/name pairs of every tenant the user can switch to.
    pub async fn simple_tenant_list(&self) -> Result<Value> {
        self.get("/api/tenants/simplified").await
    }

    pub async fn redirect_to_tenant(&self, tenant_id: &str) -> Result<Value> {
        self.get(&format!("/api/tenants/{}/_redirect", seg(tenant_id)))
            .await
    }

    pub async fn tenant_names(&self, tenant_ids: &[String]) -> Result<Value> {
        self.post("/api/tenants/_names", tenant_ids).await
    }

    pub async fn save_tenant_translations(&self, tenant_id: &str, translations: &Value) -> Result<Value> {
        self.post(&format!("/api/tenant/{}/_translate", seg(tenant_id)), translations)
            .await
    }
}
