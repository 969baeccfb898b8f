use async_trait::async_trait;

use crate::domain::order::{OrderDraft, OrderId, OrderRecord, OrderStatus};
use crate::domain::page::{PageRequest, PageSlice, SortDirection};
use crate::domain::ports::{OrderGateway, PageSource};
use crate::domain::user::UserId;
use crate::errors::AppError;

use super::api_client::ApiClient;
use super::catalog::page_query;
use super::models::PagedData;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT_FIELD: &str = "orderId";
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Desc;

/// Order endpoints. As a page source it lists all orders, optionally only
/// those with one status.
#[derive(Clone)]
pub struct OrderBook {
    client: ApiClient,
    status: Option<OrderStatus>,
}

impl OrderBook {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            status: None,
        }
    }

    pub fn with_status(client: ApiClient, status: OrderStatus) -> Self {
        Self {
            client,
            status: Some(status),
        }
    }

    pub async fn get_order(&self, id: OrderId) -> Result<OrderRecord, AppError> {
        let path = format!("/order/{id}");
        self.client.send_envelope(self.client.get(&path)).await
    }

    pub async fn update_order(&self, id: OrderId, draft: &OrderDraft) -> Result<OrderRecord, AppError> {
        let path = format!("/order/{id}");
        self.client
            .send_envelope(self.client.put(&path).json(draft))
            .await
    }

    /// The body is the bare status string, e.g. `"SHIPPED"`.
    pub async fn change_status(&self, id: OrderId, status: OrderStatus) -> Result<String, AppError> {
        if status == OrderStatus::Unknown {
            return Err(AppError::Precondition("choose a valid order status".to_string()));
        }
        let path = format!("/order/changeOrderStatus/{id}");
        self.client
            .send_ack(self.client.put(&path).json(&status))
            .await
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<String, AppError> {
        let path = format!("/order/{id}");
        self.client.send_ack(self.client.delete(&path)).await
    }

    pub fn for_customer(&self, customer_id: UserId) -> CustomerOrders {
        CustomerOrders {
            client: self.client.clone(),
            customer_id,
        }
    }
}

#[async_trait]
impl PageSource for OrderBook {
    type Record = OrderRecord;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageSlice<OrderRecord>, AppError> {
        let mut query = page_query(request);
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        let builder = self.client.get("/order/getAllOrders").query(&query);
        let data: PagedData<OrderRecord> = self.client.send_envelope(builder).await?;
        Ok(data.into())
    }
}

#[async_trait]
impl OrderGateway for OrderBook {
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord, AppError> {
        self.client
            .send_envelope(self.client.post("/order").json(draft))
            .await
    }
}

/// One customer's order history. The endpoint pages but does not sort.
#[derive(Clone)]
pub struct CustomerOrders {
    client: ApiClient,
    customer_id: UserId,
}

#[async_trait]
impl PageSource for CustomerOrders {
    type Record = OrderRecord;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageSlice<OrderRecord>, AppError> {
        let path = format!("/order/customer/{}", self.customer_id);
        let builder = self
            .client
            .get(&path)
            .query(&[("page", request.page), ("size", request.size)]);
        let data: PagedData<OrderRecord> = self.client.send_envelope(builder).await?;
        Ok(data.into())
    }
}
