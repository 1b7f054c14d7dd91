//! Member API - domain operations over the HTTP transport

use async_trait::async_trait;
use shared::models::{Member, MemberFormData};
use tracing::debug;

use crate::http::HttpClient;
use crate::{ClientConfig, ClientError, ClientResult};

pub const MEMBERS_PATH: &str = "/gymApi/members/";
pub const HEALTH_PATH: &str = "/gymApi/health/";

fn member_path(id: i64) -> String {
    format!("{MEMBERS_PATH}{id}/")
}

/// Remote member operations
///
/// Implemented over HTTP by [`GymApiClient`]; the store is generic over this
/// trait so it can run against any backend.
#[async_trait]
pub trait MemberApi: Send + Sync {
    async fn list_members(&self) -> ClientResult<Vec<Member>>;
    async fn get_member(&self, id: i64) -> ClientResult<Member>;
    async fn create_member(&self, form: &MemberFormData) -> ClientResult<Member>;
    async fn update_member(&self, id: i64, form: &MemberFormData) -> ClientResult<Member>;
    async fn delete_member(&self, id: i64) -> ClientResult<()>;
    /// Liveness probe; never fails, reports `false` instead
    async fn health_check(&self) -> bool;
}

/// HTTP implementation of [`MemberApi`]
#[derive(Debug, Clone)]
pub struct GymApiClient {
    http: HttpClient,
}

impl GymApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client from `GYM_API_BASE_URL` / `GYM_API_TIMEOUT`
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl MemberApi for GymApiClient {
    async fn list_members(&self) -> ClientResult<Vec<Member>> {
        let members: Option<Vec<Member>> = self.http.get(MEMBERS_PATH).await?;
        let members = members.unwrap_or_default();
        debug!(count = members.len(), "Fetched members");
        Ok(members)
    }

    async fn get_member(&self, id: i64) -> ClientResult<Member> {
        self.http
            .get(&member_path(id))
            .await?
            .ok_or_else(|| ClientError::NotFound("Member not found".into()))
    }

    async fn create_member(&self, form: &MemberFormData) -> ClientResult<Member> {
        self.http
            .post(MEMBERS_PATH, form)
            .await?
            .ok_or_else(|| ClientError::Unexpected("Failed to create member".into()))
    }

    async fn update_member(&self, id: i64, form: &MemberFormData) -> ClientResult<Member> {
        self.http
            .put(&member_path(id), form)
            .await?
            .ok_or_else(|| ClientError::Unexpected("Failed to update member".into()))
    }

    async fn delete_member(&self, id: i64) -> ClientResult<()> {
        // Whatever the server sends back is ignored
        let _: Option<serde_json::Value> = self.http.delete(&member_path(id)).await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.http
            .get::<serde_json::Value>(HEALTH_PATH)
            .await
            .is_ok()
    }
}
