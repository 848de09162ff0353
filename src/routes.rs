use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{protected, public};
use crate::middleware::token_auth_middleware;
use crate::state::AppState;

/// Builds the full route table around the given state.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        // Public
        .route("/", get(public::system::root))
        .route("/health", get(public::system::health))
        .merge(hello_routes())
        .merge(profile_routes(state.clone()))
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config));

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn hello_routes() -> Router<AppState> {
    use public::{hello, hello_viewset};

    Router::new()
        .route(
            "/hello-view/",
            get(hello::hello_view_get)
                .post(hello::hello_view_post)
                .put(hello::hello_view_put)
                .patch(hello::hello_view_patch)
                .delete(hello::hello_view_delete),
        )
        .route(
            "/hello-viewset/",
            get(hello_viewset::list).post(hello_viewset::create),
        )
        .route("/hello-viewset/:id", hello_viewset_detail())
        .route("/hello-viewset/:id/", hello_viewset_detail())
}

fn hello_viewset_detail() -> MethodRouter<AppState> {
    use public::hello_viewset;

    get(hello_viewset::retrieve)
        .put(hello_viewset::update)
        .patch(hello_viewset::partial_update)
        .delete(hello_viewset::destroy)
}

fn profile_routes(state: AppState) -> Router<AppState> {
    let token_auth = middleware::from_fn_with_state(state, token_auth_middleware);

    Router::new()
        .route(
            "/profile/",
            get(public::profile_list).post(public::profile_create),
        )
        .route(
            "/profile/:id",
            // route_layer only wraps the methods registered before it,
            // so GET stays public
            put(protected::profile_update)
                .patch(protected::profile_partial_update)
                .delete(protected::profile_destroy)
                .route_layer(token_auth)
                .get(public::profile_retrieve),
        )
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
