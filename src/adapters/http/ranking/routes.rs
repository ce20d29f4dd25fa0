//! HTTP routes for ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{compute_ranking, get_preset, health, rank_preset, RankingAppState};

/// Creates the ranking router with all routes.
///
/// Routes:
/// - `GET /health` - Liveness
/// - `POST /api/aras/rankings` - Rank posted alternatives
/// - `GET /api/aras/presets/:name` - Built-in preset (when enabled)
/// - `GET /api/aras/presets/:name/ranking` - Rank a built-in preset (when enabled)
pub fn ranking_routes(state: RankingAppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/aras/rankings", post(compute_ranking));

    if state.presets_enabled {
        router = router
            .route("/api/aras/presets/:name", get(get_preset))
            .route("/api/aras/presets/:name/ranking", get(rank_preset));
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        ranking_routes(RankingAppState::new(Default::default()))
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn smartphone_preset_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/aras/presets/smartphone")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_preset_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/aras/presets/laptop")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn presets_can_be_disabled() {
        let state = RankingAppState {
            presets_enabled: false,
            ..RankingAppState::new(Default::default())
        };

        let response = ranking_routes(state)
            .oneshot(
                Request::builder()
                    .uri("/api/aras/presets/smartphone")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/aras/rankings")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
