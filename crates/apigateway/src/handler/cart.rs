use crate::{middleware::JsonBody, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use cart::{
    abstract_trait::cart::service::{DynCartCommandService, DynCartQueryService},
    domain::requests::cart::{AddProductToCartRequest, CreateCartRequest},
    model::cart::Cart,
};
use shared::{
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/carts",
    tag = "Cart",
    responses(
        (status = 200, description = "All carts", body = ApiResponse<Vec<Cart>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_carts(
    Extension(service): Extension<DynCartQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cid}",
    tag = "Cart",
    params(("cid" = String, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart details", body = ApiResponse<Cart>),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartQueryService>,
    Path(cid): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&cid).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    tag = "Cart",
    request_body = CreateCartRequest,
    responses(
        (status = 201, description = "Cart created", body = ApiResponse<Cart>),
        (status = 400, description = "Invalid line items", body = ErrorResponse),
        (status = 500, description = "Persistence error", body = ErrorResponse)
    )
)]
pub async fn create_cart(
    Extension(service): Extension<DynCartCommandService>,
    JsonBody(body): JsonBody<CreateCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_cart(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cid}/product/{pid}",
    tag = "Cart",
    params(
        ("cid" = String, Path, description = "Cart ID"),
        ("pid" = String, Path, description = "Product ID")
    ),
    request_body(content = AddProductToCartRequest, description = "Optional; quantity defaults to 1"),
    responses(
        (status = 200, description = "Cart with the product added", body = ApiResponse<Cart>),
        (status = 400, description = "Unknown product or invalid quantity", body = ErrorResponse),
        (status = 404, description = "Cart not found", body = ErrorResponse),
        (status = 500, description = "Persistence error", body = ErrorResponse)
    )
)]
pub async fn add_product_to_cart(
    Extension(service): Extension<DynCartCommandService>,
    Path((cid, pid)): Path<(String, String)>,
    JsonBody(body): JsonBody<AddProductToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_product_to_cart(&cid, &pid, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cid}",
    tag = "Cart",
    params(("cid" = String, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart deleted", body = ApiResponse<Cart>),
        (status = 404, description = "Cart not found", body = ErrorResponse),
        (status = 500, description = "Persistence error", body = ErrorResponse)
    )
)]
pub async fn delete_cart(
    Extension(service): Extension<DynCartCommandService>,
    Path(cid): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_cart(&cid).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/carts", get(get_carts).post(create_cart))
        .route("/api/carts/{cid}", get(get_cart).delete(delete_cart))
        .route("/api/carts/{cid}/product/{pid}", post(add_product_to_cart))
        .layer(Extension(app_state.cart.cart_query.clone()))
        .layer(Extension(app_state.cart.cart_command.clone()))
}
