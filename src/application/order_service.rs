use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::order::{ClientTimestamp, Order, OrderInput, OrderWithCustomerName};
use crate::domain::ports::OrderRepository;

/// Order fields as received from a client, before date normalization.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_id: i32,
    pub order_date: ClientTimestamp,
    pub total_amount: BigDecimal,
}

impl OrderDraft {
    fn normalize(self) -> OrderInput {
        OrderInput {
            customer_id: self.customer_id,
            order_date: self.order_date.into_utc(),
            total_amount: self.total_amount,
        }
    }
}

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: i32) -> Result<Order, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    /// Persist a new order. The customer reference is not checked here; the
    /// database foreign key rejects dangling ids.
    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = self.repo.create(draft.normalize())?;
        log::info!(
            "Created order id={} customer_id={}",
            order.id,
            order.customer_id
        );
        Ok(order)
    }

    pub fn update_order(
        &self,
        id: i32,
        body_id: Option<i32>,
        draft: OrderDraft,
    ) -> Result<(), DomainError> {
        if body_id != Some(id) {
            return Err(DomainError::IdMismatch {
                path: id,
                body: body_id,
            });
        }
        if !self.repo.update(id, draft.normalize())? {
            return Err(DomainError::NotFound);
        }
        log::debug!("Updated order id={}", id);
        Ok(())
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id)? {
            return Err(DomainError::NotFound);
        }
        log::info!("Deleted order id={}", id);
        Ok(())
    }

    pub fn orders_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
        self.repo.list_by_customer(customer_id)
    }

    /// Sum of `total_amount` over the customer's orders, zero when there are none.
    pub fn total_amount_by_customer(&self, customer_id: i32) -> Result<BigDecimal, DomainError> {
        self.repo.total_amount_by_customer(customer_id)
    }

    pub fn orders_with_customer_names(&self) -> Result<Vec<OrderWithCustomerName>, DomainError> {
        self.repo.list_with_customer_names()
    }
}
