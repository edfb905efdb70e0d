mod category;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use catalog::state::AppState;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        category::get_categories,
        category::create_category,
        category::update_category,
        category::delete_category,
    ),
    tags(
        (name = "category", description = "Category management endpoints.")
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<(), Box<dyn std::error::Error>> {
        let shared_state = Arc::new(app_state);

        let router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(category_routes(shared_state.clone()))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (router, api) = router.split_for_parts();

        let router =
            router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(addr).await?;
        println!("Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await?;
        Ok(())
    }
}
