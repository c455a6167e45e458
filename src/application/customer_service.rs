use std::sync::Arc;

use crate::domain::customer::{Customer, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: impl CustomerRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo.list()
    }

    pub fn get_customer(&self, id: i32) -> Result<Customer, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn create_customer(&self, input: CustomerInput) -> Result<Customer, DomainError> {
        let customer = self.repo.create(input)?;
        log::info!("Created customer id={}", customer.id);
        Ok(customer)
    }

    /// Overwrite every field of customer `id`. `body_id` must equal `id`.
    pub fn update_customer(
        &self,
        id: i32,
        body_id: Option<i32>,
        input: CustomerInput,
    ) -> Result<(), DomainError> {
        if body_id != Some(id) {
            return Err(DomainError::IdMismatch {
                path: id,
                body: body_id,
            });
        }
        if !self.repo.update(id, input)? {
            return Err(DomainError::NotFound);
        }
        log::debug!("Updated customer id={}", id);
        Ok(())
    }

    pub fn delete_customer(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id)? {
            return Err(DomainError::NotFound);
        }
        log::info!("Deleted customer id={}", id);
        Ok(())
    }
}
