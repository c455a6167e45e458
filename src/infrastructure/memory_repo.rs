//! Mutex-backed repositories used by the unit and HTTP tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use bigdecimal::BigDecimal;

use crate::domain::customer::{Customer, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderInput, OrderWithCustomerName};
use crate::domain::ports::{CustomerRepository, OrderRepository};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, DomainError> {
    m.lock()
        .map_err(|e| DomainError::Internal(format!("poisoned lock: {e}")))
}

#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    table: Arc<Mutex<Table<Customer>>>,
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(lock(&self.table)?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    fn create(&self, input: CustomerInput) -> Result<Customer, DomainError> {
        let mut table = lock(&self.table)?;
        let customer = Customer {
            id: table.next_id(),
            name: input.name,
        };
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn update(&self, id: i32, input: CustomerInput) -> Result<bool, DomainError> {
        let mut table = lock(&self.table)?;
        Ok(match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = input.name;
                true
            }
            None => false,
        })
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(lock(&self.table)?.rows.remove(&id).is_some())
    }
}

/// Orders reference customers held by a shared [`InMemoryCustomerRepository`]
/// so the name join can be answered.
#[derive(Clone)]
pub struct InMemoryOrderRepository {
    table: Arc<Mutex<Table<Order>>>,
    customers: InMemoryCustomerRepository,
}

impl InMemoryOrderRepository {
    pub fn new(customers: InMemoryCustomerRepository) -> Self {
        Self {
            table: Arc::default(),
            customers,
        }
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(lock(&self.table)?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    fn create(&self, input: OrderInput) -> Result<Order, DomainError> {
        let mut table = lock(&self.table)?;
        let order = Order {
            id: table.next_id(),
            customer_id: input.customer_id,
            order_date: input.order_date,
            total_amount: input.total_amount,
        };
        table.rows.insert(order.id, order.clone());
        Ok(order)
    }

    fn update(&self, id: i32, input: OrderInput) -> Result<bool, DomainError> {
        let mut table = lock(&self.table)?;
        Ok(match table.rows.get_mut(&id) {
            Some(row) => {
                row.customer_id = input.customer_id;
                row.order_date = input.order_date;
                row.total_amount = input.total_amount;
                true
            }
            None => false,
        })
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(lock(&self.table)?.rows.remove(&id).is_some())
    }

    fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
        Ok(lock(&self.table)?
            .rows
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn total_amount_by_customer(&self, customer_id: i32) -> Result<BigDecimal, DomainError> {
        Ok(lock(&self.table)?
            .rows
            .values()
            .filter(|o| o.customer_id == customer_id)
            .map(|o| o.total_amount.clone())
            .sum())
    }

    fn list_with_customer_names(&self) -> Result<Vec<OrderWithCustomerName>, DomainError> {
        let orders = self.list()?;
        let mut rows = Vec::with_capacity(orders.len());
        for order in orders {
            if let Some(customer) = self.customers.find_by_id(order.customer_id)? {
                rows.push(OrderWithCustomerName {
                    order_id: order.id,
                    total_amount: order.total_amount,
                    order_date: order.order_date,
                    customer_name: customer.name,
                });
            }
        }
        Ok(rows)
    }
}
