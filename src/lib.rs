pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

use application::account_service::AccountService;
use application::checkout_service::CheckoutService;
use application::dashboard_service::DashboardService;
use application::list_controller::ListController;
use application::session_context::SessionContext;
use domain::cart::CartLedger;
use domain::order::{OrderRecord, OrderStatus, ShippingAddress};
use domain::ports::SessionStore;
use domain::user::UserId;
use infrastructure::api_client::ApiClient;
use infrastructure::auth::AuthApi;
use infrastructure::catalog::{self, ItemCatalog};
use infrastructure::dashboard::DashboardApi;
use infrastructure::orders::{self, CustomerOrders, OrderBook};
use infrastructure::session_store::FileSessionStore;
use infrastructure::users::{self, UserDirectory};

pub use config::Config;
pub use errors::AppError;

/// Wires the API client, the session context and the cart together.
///
/// Views obtain their controllers and services from here; each one is built
/// with the current session's token, so after login or logout callers ask
/// again instead of holding on to stale clients.
pub struct Storefront<S: SessionStore = FileSessionStore> {
    client: ApiClient,
    session: SessionContext<S>,
    cart: CartLedger,
}

impl Storefront<FileSessionStore> {
    /// Opens the storefront with the session file named in `config`.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        Self::with_store(config, FileSessionStore::new(config.session_file.clone()))
    }
}

impl<S: SessionStore> Storefront<S> {
    pub fn with_store(config: &Config, store: S) -> Result<Self, AppError> {
        let client = ApiClient::from_config(config)?;
        let mut session = SessionContext::new(store);
        session.init();
        Ok(Self {
            client,
            session,
            cart: CartLedger::with_shipping_fee(config.shipping_fee.clone()),
        })
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        self.client.for_session(self.session.current())
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext<S> {
        &mut self.session
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartLedger {
        &mut self.cart
    }

    pub fn accounts(&self) -> AccountService<AuthApi> {
        AccountService::new(AuthApi::new(self.client.for_session(None)))
    }

    pub fn catalog(&self) -> ListController<ItemCatalog> {
        ListController::new(
            ItemCatalog::new(self.client()),
            catalog::DEFAULT_PAGE_SIZE,
            catalog::DEFAULT_SORT_FIELD,
            catalog::DEFAULT_SORT_DIRECTION,
        )
    }

    pub fn items(&self) -> ItemCatalog {
        ItemCatalog::new(self.client())
    }

    /// Signed-in customer's own orders.
    pub fn my_orders(&self) -> Result<ListController<CustomerOrders>, AppError> {
        let user_id: UserId = self.session.require_login()?.user.user_id;
        Ok(ListController::new(
            OrderBook::new(self.client()).for_customer(user_id),
            orders::DEFAULT_PAGE_SIZE,
            orders::DEFAULT_SORT_FIELD,
            orders::DEFAULT_SORT_DIRECTION,
        ))
    }

    /// Admin order list, optionally restricted to one status.
    pub fn orders(&self, status: Option<OrderStatus>) -> Result<ListController<OrderBook>, AppError> {
        self.session.require_admin()?;
        let book = match status {
            Some(status) => OrderBook::with_status(self.client(), status),
            None => OrderBook::new(self.client()),
        };
        Ok(ListController::new(
            book,
            orders::DEFAULT_PAGE_SIZE,
            orders::DEFAULT_SORT_FIELD,
            orders::DEFAULT_SORT_DIRECTION,
        ))
    }

    pub fn order_book(&self) -> Result<OrderBook, AppError> {
        self.session.require_admin()?;
        Ok(OrderBook::new(self.client()))
    }

    pub fn users(&self) -> Result<ListController<UserDirectory>, AppError> {
        self.session.require_admin()?;
        Ok(ListController::new(
            UserDirectory::new(self.client()),
            users::DEFAULT_PAGE_SIZE,
            users::DEFAULT_SORT_FIELD,
            users::DEFAULT_SORT_DIRECTION,
        ))
    }

    pub fn user_directory(&self) -> Result<UserDirectory, AppError> {
        self.session.require_admin()?;
        Ok(UserDirectory::new(self.client()))
    }

    pub fn dashboard(&self) -> Result<DashboardService<DashboardApi>, AppError> {
        self.session.require_admin()?;
        Ok(DashboardService::new(DashboardApi::new(self.client())))
    }

    pub async fn checkout(&mut self, address: ShippingAddress) -> Result<OrderRecord, AppError> {
        let service = CheckoutService::new(OrderBook::new(self.client()));
        service
            .checkout(&mut self.session, &mut self.cart, address)
            .await
    }

    /// Applies the session policy to a failed request; returns true when the
    /// caller must send the user to login.
    pub fn observe(&mut self, error: &AppError) -> bool {
        self.session.observe(error)
    }
}
