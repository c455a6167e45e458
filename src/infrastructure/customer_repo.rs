use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, CustomerValues};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customers::table
            .select(CustomerRow::as_select())
            .order(customers::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn create(&self, input: CustomerInput) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(customers::table)
            .values(&CustomerValues::from(input))
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn update(&self, id: i32, input: CustomerInput) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(customers::table.find(id))
            .set(&CustomerValues::from(input))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(customers::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::DieselCustomerRepository;
    use crate::domain::customer::CustomerInput;
    use crate::domain::ports::CustomerRepository;
    use crate::infrastructure::testdb::setup_db;

    fn input(name: &str) -> CustomerInput {
        CustomerInput {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn create_and_find_by_id_roundtrip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        let created = repo.create(input("Alice")).expect("create failed");
        let found = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("customer should exist");

        assert_eq!(found, created);
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn list_returns_rows_in_id_order() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        assert!(repo.list().expect("list failed").is_empty());
        let a = repo.create(input("Alice")).expect("create failed");
        let b = repo.create(input("Bob")).expect("create failed");

        let ids: Vec<i32> = repo
            .list()
            .expect("list failed")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn update_and_delete_report_missing_rows() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);
        let created = repo.create(input("Alice")).expect("create failed");

        assert!(repo.update(created.id, input("Alicia")).expect("update failed"));
        assert!(!repo.update(created.id + 100, input("Nobody")).expect("update failed"));
        assert_eq!(
            repo.find_by_id(created.id).unwrap().unwrap().name,
            "Alicia"
        );

        assert!(repo.delete(created.id).expect("delete failed"));
        assert!(!repo.delete(created.id).expect("delete failed"));
    }
}
