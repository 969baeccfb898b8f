use async_trait::async_trait;

use crate::domain::catalog::{Item, ItemDraft, ItemId};
use crate::domain::page::{PageRequest, PageSlice, SortDirection};
use crate::domain::ports::PageSource;
use crate::errors::AppError;

use super::api_client::ApiClient;
use super::models::PagedData;

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_SORT_FIELD: &str = "itemId";
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Asc;

/// Item endpoints: the storefront catalog and admin product management.
#[derive(Clone)]
pub struct ItemCatalog {
    client: ApiClient,
}

impl ItemCatalog {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Item, AppError> {
        let path = format!("/item/by-id/{id}");
        self.client.send_envelope(self.client.get(&path)).await
    }

    pub async fn create_item(&self, draft: &ItemDraft) -> Result<Item, AppError> {
        draft.validate()?;
        self.client
            .send_envelope(self.client.post("/item/save").json(draft))
            .await
    }

    pub async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item, AppError> {
        draft.validate()?;
        let path = format!("/item/{id}");
        self.client
            .send_envelope(self.client.put(&path).json(draft))
            .await
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<String, AppError> {
        let path = format!("/item/{id}");
        self.client.send_ack(self.client.delete(&path)).await
    }
}

#[async_trait]
impl PageSource for ItemCatalog {
    type Record = Item;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageSlice<Item>, AppError> {
        let builder = self.client.get("/item/item-list").query(&page_query(request));
        let data: PagedData<Item> = self.client.send_envelope(builder).await?;
        Ok(data.into())
    }
}

/// `page`, `size`, `sortBy` and `sortDirection` query parameters.
pub(crate) fn page_query(request: &PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", request.page.to_string()),
        ("size", request.size.to_string()),
        ("sortBy", request.sort_field.clone()),
        ("sortDirection", request.sort_direction.to_string()),
    ]
}
