use crate::domain::errors::RemoteFetchError;
use crate::domain::logging::{LogComponent, get_logger, get_time_provider};
use crate::domain::workshop::repositories::{
    NewPayment, NewPendingProduct, NewServiceOrder, OrderUpdate, PendingProductUpdate,
    ProductAssignment, RecordEditor,
};
use crate::domain::workshop::{
    OrderStatus, Payment, PendingProduct, RecordId, ServiceOrder, Timestamp,
};

/// Application service - explicit command handlers for the console forms.
///
/// Each handler is registered against a concrete view instance by the
/// presentation layer; there is no ambient global namespace to look them up
/// in. Mutations go straight to the Record Store and the caller re-runs the
/// load cycle afterwards, the handlers never patch derived aggregates.
pub struct CommandHandlers<E: RecordEditor> {
    editor: E,
}

impl<E: RecordEditor> CommandHandlers<E> {
    pub fn new(editor: E) -> Self {
        Self { editor }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub async fn save_order(&self, order: NewServiceOrder) -> Result<ServiceOrder, RemoteFetchError> {
        let created = self.editor.create_order(order).await?;
        get_logger().info(
            LogComponent::Application("Commands"),
            &format!("order {} created", created.id),
        );
        Ok(created)
    }

    pub async fn edit_order(
        &self,
        id: &RecordId,
        update: OrderUpdate,
    ) -> Result<ServiceOrder, RemoteFetchError> {
        self.editor.update_order(id, update).await
    }

    pub async fn start_order(&self, id: &RecordId) -> Result<ServiceOrder, RemoteFetchError> {
        self.editor.update_order_status(id, OrderStatus::EmAndamento, None).await
    }

    /// Concludes the order, stamping the completion instant that the
    /// financial history will sort by.
    pub async fn complete_order(&self, id: &RecordId) -> Result<ServiceOrder, RemoteFetchError> {
        let now = Timestamp::from_millis(get_time_provider().current_timestamp() as i64);
        self.editor.update_order_status(id, OrderStatus::Concluido, Some(now)).await
    }

    /// Flags the order as seen. The authoritative badge count comes from the
    /// next load cycle; callers may decrement a local copy as a cosmetic
    /// cache only.
    pub async fn mark_order_viewed(&self, id: &RecordId) -> Result<ServiceOrder, RemoteFetchError> {
        self.editor.mark_order_viewed(id).await
    }

    pub async fn delete_order(&self, id: &RecordId) -> Result<(), RemoteFetchError> {
        let result = self.editor.delete_order(id).await;
        if result.is_ok() {
            get_logger().info(
                LogComponent::Application("Commands"),
                &format!("order {} deleted", id),
            );
        }
        result
    }

    pub async fn save_payment(&self, payment: NewPayment) -> Result<Payment, RemoteFetchError> {
        let created = self.editor.create_payment(payment).await?;
        get_logger().info(
            LogComponent::Application("Commands"),
            &format!("payment {} registered", created.id),
        );
        Ok(created)
    }

    pub async fn save_product(
        &self,
        product: NewPendingProduct,
    ) -> Result<PendingProduct, RemoteFetchError> {
        self.editor.create_pending_product(product).await
    }

    pub async fn edit_product(
        &self,
        id: &RecordId,
        update: PendingProductUpdate,
    ) -> Result<PendingProduct, RemoteFetchError> {
        self.editor.update_pending_product(id, update).await
    }

    pub async fn delete_product(&self, id: &RecordId) -> Result<(), RemoteFetchError> {
        self.editor.delete_pending_product(id).await
    }

    /// Hands a backlog item to a craftsman, turning it into a pending order.
    /// The order is inserted first, then the product is flagged as assigned;
    /// sequential best-effort, the backend offers no transaction over REST.
    pub async fn assign_product(
        &self,
        product: &PendingProduct,
        assignment: ProductAssignment,
    ) -> Result<ServiceOrder, RemoteFetchError> {
        let order = self
            .editor
            .create_order(NewServiceOrder {
                title: product.name.clone(),
                description: product.description.clone(),
                craftsman_id: assignment.craftsman_id,
                value: assignment.value,
                deadline: assignment.deadline,
                photo_url: product.photo_url.clone(),
            })
            .await?;
        self.editor.flag_product_assigned(&product.id).await?;

        get_logger().info(
            LogComponent::Application("Commands"),
            &format!("product {} converted into order {}", product.id, order.id),
        );
        Ok(order)
    }
}
