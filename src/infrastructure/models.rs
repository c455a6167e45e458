use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::customer::{Customer, CustomerInput};
use crate::domain::order::{Order, OrderInput};
use crate::schema::{customers, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
}

/// Column values for both insert and full-row overwrite.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customers)]
pub struct CustomerValues {
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = orders)]
#[diesel(belongs_to(CustomerRow, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderValues {
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<CustomerInput> for CustomerValues {
    fn from(input: CustomerInput) -> Self {
        CustomerValues { name: input.name }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            customer_id: row.customer_id,
            order_date: row.order_date,
            total_amount: row.total_amount,
        }
    }
}

impl From<OrderInput> for OrderValues {
    fn from(input: OrderInput) -> Self {
        OrderValues {
            customer_id: input.customer_id,
            order_date: input.order_date,
            total_amount: input.total_amount,
        }
    }
}
