use async_trait::async_trait;

use crate::domain::page::{PageRequest, PageSlice, SortDirection};
use crate::domain::ports::PageSource;
use crate::domain::user::{UserDraft, UserId, UserProfile};
use crate::errors::AppError;

use super::api_client::ApiClient;
use super::catalog::page_query;
use super::models::PagedData;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT_FIELD: &str = "userId";
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Desc;

/// User and customer administration.
#[derive(Clone)]
pub struct UserDirectory {
    client: ApiClient,
}

impl UserDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_user(&self, id: UserId) -> Result<UserProfile, AppError> {
        let path = format!("/user/{id}");
        self.client.send_envelope(self.client.get(&path)).await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<UserProfile, AppError> {
        self.client
            .send_envelope(self.client.post("/user").json(draft))
            .await
    }

    pub async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UserProfile, AppError> {
        let path = format!("/user/{id}");
        self.client
            .send_envelope(self.client.put(&path).json(draft))
            .await
    }

    pub async fn delete_user(&self, id: UserId) -> Result<String, AppError> {
        let path = format!("/user/{id}");
        self.client.send_ack(self.client.delete(&path)).await
    }
}

#[async_trait]
impl PageSource for UserDirectory {
    type Record = UserProfile;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageSlice<UserProfile>, AppError> {
        let builder = self.client.get("/user/getAllUsers").query(&page_query(request));
        let data: PagedData<UserProfile> = self.client.send_envelope(builder).await?;
        Ok(data.into())
    }
}
