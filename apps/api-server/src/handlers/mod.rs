//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes - all require an active account
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(posts::create_post))
                            .route(web::get().to(posts::get_posts))
                            .route(web::put().to(posts::update_post)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::{App, dev::ServiceResponse, test, web};

    use quill_core::domain::UserStatus;
    use quill_core::ports::{PasswordService, TokenService};
    use quill_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

    use crate::state::AppState;

    pub fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "quill-test".to_string(),
        }))
    }

    pub fn bearer(user_id: i64, status: UserStatus) -> (&'static str, String) {
        let token = token_service()
            .generate_token(user_id, "user@example.com", status)
            .unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    /// Route `req` through the full application backed by `state`.
    pub async fn send(state: &AppState, req: test::TestRequest) -> ServiceResponse {
        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(token_service()))
                .app_data(web::Data::new(password_service))
                .configure(super::configure_routes),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }
}
