use bigdecimal::BigDecimal;

use super::customer::{Customer, CustomerInput};
use super::errors::DomainError;
use super::order::{Order, OrderInput, OrderWithCustomerName};

/// Storage for customers. `update` and `delete` report whether a row with
/// the given id existed.
pub trait CustomerRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Customer>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;
    fn create(&self, input: CustomerInput) -> Result<Customer, DomainError>;
    fn update(&self, id: i32, input: CustomerInput) -> Result<bool, DomainError>;
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Storage for orders. Listing methods return rows in id order.
pub trait OrderRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError>;
    fn create(&self, input: OrderInput) -> Result<Order, DomainError>;
    fn update(&self, id: i32, input: OrderInput) -> Result<bool, DomainError>;
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
    fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError>;
    fn total_amount_by_customer(&self, customer_id: i32) -> Result<BigDecimal, DomainError>;
    fn list_with_customer_names(&self) -> Result<Vec<OrderWithCustomerName>, DomainError>;
}
