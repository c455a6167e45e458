use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::customer_service::CustomerService;
use crate::domain::customer::{Customer, CustomerInput};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Ignored on create; must equal the path id on update.
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            name: c.name,
        }
    }
}

impl CustomerRequest {
    fn into_parts(self) -> (Option<i32>, CustomerInput) {
        (self.id, CustomerInput { name: self.name })
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers", body = [CustomerResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    service: web::Data<CustomerService>,
) -> Result<HttpResponse, AppError> {
    let customers = web::block(move || service.list_customers()).await??;

    let body: Vec<CustomerResponse> = customers.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    service: web::Data<CustomerService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let customer = web::block(move || service.get_customer(id)).await??;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// POST /api/customers
///
/// Responds with the stored record and a `Location` header pointing at it.
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    service: web::Data<CustomerService>,
    body: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, input) = body.into_inner().into_parts();
    let customer = web::block(move || service.create_customer(input)).await??;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/customers/{}", customer.id)))
        .json(CustomerResponse::from(customer)))
}

/// PUT /api/customers/{id}
///
/// Replaces the whole record. The body `id` must equal the path id.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 204, description = "Customer replaced"),
        (status = 400, description = "Path and body ids differ"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    service: web::Data<CustomerService>,
    path: web::Path<i32>,
    body: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (body_id, input) = body.into_inner().into_parts();
    web::block(move || service.update_customer(id, body_id, input)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    service: web::Data<CustomerService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || service.delete_customer(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}
