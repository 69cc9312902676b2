//! Typed resource endpoints.
//!
//! Thin wrappers over the pipeline that pin each endpoint to its
//! envelope key and record type. CRUD screens call these; none of them
//! builds its own request.

use serde::de::DeserializeOwned;
use serde::Serialize;

use propkit_core::{
    ContactInfo, Invoice, Landlord, Lease, LeaseId, MaintenanceTicket, Payment, Property, Tenant,
    TenantId, Unit, UnitId, UserProfile,
};

use crate::client::ApiClient;
use crate::envelope::{self, LoginResponse};
use crate::error::ApiError;

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Creation payload for a tenant record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub full_name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<UnitId>,
}

impl ApiClient {
    /// POST `/auth/login`. On success the caller stores the returned
    /// token and profile through the auth context; on failure no
    /// session state is touched here or anywhere else.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = self.post("/auth/login", credentials).await?;
        envelope::parse_login(body)
    }

    /// GET a collection endpoint and unwrap `data.<key>`.
    pub async fn list<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>, ApiError> {
        let body = self.get(path).await?;
        envelope::unwrap_collection(body, key)
    }

    /// GET a record endpoint and unwrap `data.<key>`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<T, ApiError> {
        let body = self.get(path).await?;
        envelope::unwrap_record(body, key)
    }

    /// POST a creation payload and unwrap the created record.
    pub async fn create<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        key: &str,
        draft: &B,
    ) -> Result<T, ApiError> {
        let body = self.post(path, draft).await?;
        envelope::unwrap_record(body, key)
    }

    /// PATCH an update payload and unwrap the updated record.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        key: &str,
        patch: &B,
    ) -> Result<T, ApiError> {
        let body = self.patch(path, patch).await?;
        envelope::unwrap_record(body, key)
    }

    /// DELETE a record. The response body, if any, is discarded.
    pub async fn remove(&self, path: &str) -> Result<(), ApiError> {
        self.delete(path).await?;
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.list("/users", "users").await
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        self.list("/tenants", "tenants").await
    }

    pub async fn create_tenant(&self, draft: &NewTenant) -> Result<Tenant, ApiError> {
        self.create("/tenants", "tenant", draft).await
    }

    pub async fn delete_tenant(&self, id: TenantId) -> Result<(), ApiError> {
        self.remove(&format!("/tenants/{id}")).await
    }

    pub async fn list_landlords(&self) -> Result<Vec<Landlord>, ApiError> {
        self.list("/landlords", "landlords").await
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.list("/properties", "properties").await
    }

    pub async fn get_unit(&self, id: UnitId) -> Result<Unit, ApiError> {
        self.fetch(&format!("/units/{id}"), "unit").await
    }

    pub async fn list_leases(&self) -> Result<Vec<Lease>, ApiError> {
        self.list("/leases", "leases").await
    }

    /// POST `/leases/{id}/terminate`; returns the updated lease.
    pub async fn terminate_lease(&self, id: LeaseId) -> Result<Lease, ApiError> {
        let body = self
            .post(&format!("/leases/{id}/terminate"), &EmptyBody {})
            .await?;
        envelope::unwrap_record(body, "lease")
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.list("/invoices", "invoices").await
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.list("/payments", "payments").await
    }

    pub async fn list_maintenance(&self) -> Result<Vec<MaintenanceTicket>, ApiError> {
        self.list("/maintenance", "tickets").await
    }
}

#[derive(Serialize)]
struct EmptyBody {}
