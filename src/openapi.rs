use utoipa::OpenApi;

use crate::handlers::{customers, orders};

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        orders::orders_by_customer,
        orders::total_amount_by_customer,
        orders::orders_with_customer_names,
    ),
    components(schemas(
        customers::CustomerRequest,
        customers::CustomerResponse,
        orders::OrderRequest,
        orders::OrderResponse,
        orders::OrderWithCustomerNameResponse,
    )),
    tags(
        (name = "customers", description = "Customer CRUD"),
        (name = "orders", description = "Order CRUD and per-customer queries"),
    )
)]
pub struct ApiDoc;
