use std::sync::Arc;
use warp::Filter;

use crate::game_manager::GameManager;
use crate::websocket::rate_limiter::RateLimitConfig;

pub mod config;
pub mod dictionary;
pub mod game_manager;
pub mod websocket;

pub fn create_routes(
    game_manager: Arc<GameManager>,
    rate_limit: RateLimitConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let game_manager_filter = warp::any().map({
        let game_manager = game_manager.clone();
        move || game_manager.clone()
    });

    // WebSocket endpoint, one round per connection
    let websocket = warp::path("ws")
        .and(warp::ws())
        .and(game_manager_filter.clone())
        .map(move |ws: warp::ws::Ws, game_mgr: Arc<GameManager>| {
            ws.on_upgrade(move |socket| websocket::handle_connection(socket, game_mgr, rate_limit))
        });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Rounds currently being played
    let stats = warp::path("stats")
        .and(warp::get())
        .and(game_manager_filter)
        .map(|game_mgr: Arc<GameManager>| {
            warp::reply::json(&serde_json::json!({
                "active_rounds": game_mgr.active_round_count()
            }))
        });

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    websocket
        .or(health)
        .or(stats)
        .with(cors)
        .with(warp::log("wordle_round"))
}
