//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Address, NewAddress, NewOrder, NewOrderItem, Order, OrderItem, OrderStatus},
        repositories::{PgAddressesRepository, PgOrderItemsRepository, PgOrdersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    addresses_repository: PgAddressesRepository,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            addresses_repository: PgAddressesRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_address",
        skip(self, address),
        fields(user_uuid = %address.user_uuid),
        err
    )]
    async fn create_address(&self, address: NewAddress) -> Result<Address, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .addresses_repository
            .create_address(&mut tx, address)
            .await?;

        tx.commit().await?;

        info!(address_uuid = %created.uuid, "created address");

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(user_uuid = %order.user_uuid, total = order.total),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.orders_repository.create_order(&mut tx, order).await?;

        tx.commit().await?;

        info!(order_uuid = %created.uuid, "created order");

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.create_order_items",
        skip(self, items),
        fields(order_uuid = %order, item_count = items.len()),
        err
    )]
    async fn create_order_items(
        &self,
        order: Uuid,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .items_repository
            .create_order_items(&mut tx, order, items)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders_for_user(&self, user: Uuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_orders_for_user(&mut tx, user)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: Uuid) -> Result<(Order, Vec<OrderItem>), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.orders_repository.get_order(&mut tx, order).await?;
        let items = self.items_repository.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        Ok((found, items))
    }

    #[tracing::instrument(
        name = "orders.service.update_order_status",
        skip(self),
        fields(order_uuid = %order, status = %status),
        err
    )]
    async fn update_order_status(
        &self,
        order: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .orders_repository
            .update_order_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        info!(order_uuid = %updated.uuid, status = %updated.status, "updated order status");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a checkout shipping address, returning its generated id.
    async fn create_address(&self, address: NewAddress) -> Result<Address, OrdersServiceError>;

    /// Persist an order. The stored status always starts `pending`.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Persist the frozen order lines for an already-created order.
    async fn create_order_items(
        &self,
        order: Uuid,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrdersServiceError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// One customer's orders, newest first.
    async fn list_orders_for_user(&self, user: Uuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// A single order with its lines.
    async fn get_order(&self, order: Uuid) -> Result<(Order, Vec<OrderItem>), OrdersServiceError>;

    /// Administrative status update. Any status may move to any other;
    /// no transition table is enforced.
    async fn update_order_status(
        &self,
        order: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
