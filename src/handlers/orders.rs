use actix_web::http::header;
use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::{OrderDraft, OrderService};
use crate::domain::order::{ClientTimestamp, Order, OrderWithCustomerName};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Ignored on create; must equal the path id on update.
    #[serde(default)]
    pub id: Option<i32>,
    pub customer_id: i32,
    /// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` read as UTC.
    #[serde(deserialize_with = "client_timestamp")]
    #[schema(value_type = String, example = "2024-01-01T10:00:00")]
    pub order_date: ClientTimestamp,
    /// Decimal amount as a string or a JSON number, e.g. "50.00"
    #[schema(value_type = String, example = "50.00")]
    pub total_amount: BigDecimal,
}

fn client_timestamp<'de, D>(deserializer: D) -> Result<ClientTimestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl OrderRequest {
    fn into_parts(self) -> (Option<i32>, OrderDraft) {
        (
            self.id,
            OrderDraft {
                customer_id: self.customer_id,
                order_date: self.order_date,
                total_amount: self.total_amount,
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub total_amount: BigDecimal,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            id: o.id,
            customer_id: o.customer_id,
            order_date: o.order_date,
            total_amount: o.total_amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithCustomerNameResponse {
    pub order_id: i32,
    #[schema(value_type = String)]
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
}

impl From<OrderWithCustomerName> for OrderWithCustomerNameResponse {
    fn from(o: OrderWithCustomerName) -> Self {
        OrderWithCustomerNameResponse {
            order_id: o.order_id,
            total_amount: o.total_amount,
            order_date: o.order_date,
            customer_name: o.customer_name,
        }
    }
}

fn order_list(orders: Vec<Order>) -> Vec<OrderResponse> {
    orders.into_iter().map(Into::into).collect()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders()).await??;

    Ok(HttpResponse::Ok().json(order_list(orders)))
}

/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let order = web::block(move || service.get_order(id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /api/orders
///
/// A naive `orderDate` keeps its clock reading and is stored as UTC.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, draft) = body.into_inner().into_parts();
    let order = web::block(move || service.create_order(draft)).await??;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/orders/{}", order.id)))
        .json(OrderResponse::from(order)))
}

/// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderRequest,
    responses(
        (status = 204, description = "Order replaced"),
        (status = 400, description = "Path and body ids differ"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (body_id, draft) = body.into_inner().into_parts();
    web::block(move || service.update_order(id, body_id, draft)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || service.delete_order(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/orders/customer/{customerId}
///
/// Does not check that the customer exists; an unknown id yields `[]`.
#[utoipa::path(
    get,
    path = "/api/orders/customer/{customerId}",
    params(("customerId" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Orders of the customer", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_by_customer(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let orders = web::block(move || service.orders_by_customer(customer_id)).await??;

    Ok(HttpResponse::Ok().json(order_list(orders)))
}

/// GET /api/orders/customer/{customerId}/total-amount
#[utoipa::path(
    get,
    path = "/api/orders/customer/{customerId}/total-amount",
    params(("customerId" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Sum of order totals, \"0\" when none", body = String),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn total_amount_by_customer(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let total = web::block(move || service.total_amount_by_customer(customer_id)).await??;

    Ok(HttpResponse::Ok().json(total))
}

/// GET /api/orders/ordersname
#[utoipa::path(
    get,
    path = "/api/orders/ordersname",
    responses(
        (status = 200, description = "Orders with their customer's name", body = [OrderWithCustomerNameResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_with_customer_names(
    service: web::Data<OrderService>,
) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || service.orders_with_customer_names()).await??;

    let body: Vec<OrderWithCustomerNameResponse> = rows.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
