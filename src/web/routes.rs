// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Mounts every route under `/api/v1`. Called from `main.rs` when the
/// Actix `App` is assembled.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route(
            "/login",
            web::post().to(crate::web::handlers::auth_handlers::login_handler),
          )
          .route(
            "/logout",
            web::post().to(crate::web::handlers::auth_handlers::logout_handler),
          )
          .route("/me", web::get().to(crate::web::handlers::auth_handlers::me_handler)),
      )
      // Catalog Routes
      .service(web::scope("/products").route(
        "",
        web::get().to(crate::web::handlers::catalog_handlers::list_products_handler),
      ))
      // Order Routes
      .service(
        web::scope("/orders")
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::create_order_handler),
          ),
      )
      // Dashboard Routes
      .service(web::scope("/dashboard").route(
        "/stats",
        web::get().to(crate::web::handlers::dashboard_handlers::stats_handler),
      )),
  );
}
