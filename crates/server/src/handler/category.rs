use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use catalog::domain::{
    ApiResponse, ApiResponsePagination, CategoryResponse, CreateCategoryRequest, ErrorResponse,
    FindAllCategoryRequest, UpdateCategoryRequest,
};
use catalog::state::AppState;
use serde_json::json;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn error_status(err: &ErrorResponse) -> StatusCode {
    match err.status.as_str() {
        "VALIDATION" | "INVALID_ARGUMENT" => StatusCode::BAD_REQUEST,
        "NOT_FOUND" => StatusCode::NOT_FOUND,
        "CONFLICT" => StatusCode::CONFLICT,
        "SERVICE_UNAVAILABLE" => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(FindAllCategoryRequest),
    responses(
        (status = 200, description = "List all categories successfully", body = ApiResponsePagination<Vec<CategoryResponse>>),
        (status = 400, description = "Invalid paging or sort parameters", body = ErrorResponse)
    ),
    tag = "category"
)]
pub async fn get_categories(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllCategoryRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.category_service.find_all(&params).await {
        Ok(categories) => Ok((StatusCode::OK, Json(json!(categories)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/categories/create",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Create category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Category name too short", body = ErrorResponse),
        (status = 409, description = "Category name already exists", body = ErrorResponse)
    ),
    tag = "category"
)]
pub async fn create_category(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.category_service.create(&body).await {
        Ok(category) => Ok((StatusCode::CREATED, Json(json!(category)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    put,
    path = "/api/categories/update/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Update category", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 400, description = "Category name too short", body = ErrorResponse)
    ),
    tag = "category"
)]
pub async fn update_category(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    // The path is authoritative for the target id.
    body.id = id;

    match data.di_container.category_service.update(&body).await {
        Ok(category) => Ok((StatusCode::OK, Json(json!(category)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/categories/delete/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Delete category", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "category"
)]
pub async fn delete_category(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.category_service.delete(id).await {
        Ok(category) => Ok((StatusCode::OK, Json(json!(category)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/create", post(create_category))
        .route("/api/categories/update/{id}", put(update_category))
        .route("/api/categories/delete/{id}", delete(delete_category))
        .with_state(app_state)
}
