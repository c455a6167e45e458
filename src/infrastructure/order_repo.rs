use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::dsl::sum;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderInput, OrderWithCustomerName};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, orders};

use super::models::{OrderRow, OrderValues};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Order::from))
    }

    fn create(&self, input: OrderInput) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(orders::table)
            .values(&OrderValues::from(input))
            .returning(OrderRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn update(&self, id: i32, input: OrderInput) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(orders::table.find(id))
            .set(&OrderValues::from(input))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(orders::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }

    fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn total_amount_by_customer(&self, customer_id: i32) -> Result<BigDecimal, DomainError> {
        let mut conn = self.pool.get()?;

        // SUM over no rows is NULL.
        let total: Option<BigDecimal> = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .select(sum(orders::total_amount))
            .get_result(&mut conn)?;

        Ok(total.unwrap_or_else(|| BigDecimal::from(0)))
    }

    fn list_with_customer_names(&self) -> Result<Vec<OrderWithCustomerName>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<(i32, BigDecimal, DateTime<Utc>, String)> = orders::table
            .inner_join(customers::table)
            .select((
                orders::id,
                orders::total_amount,
                orders::order_date,
                customers::name,
            ))
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(order_id, total_amount, order_date, customer_name)| OrderWithCustomerName {
                    order_id,
                    total_amount,
                    order_date,
                    customer_name,
                },
            )
            .collect())
    }
}
