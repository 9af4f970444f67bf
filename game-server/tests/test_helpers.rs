#![allow(dead_code)]

use futures_util::StreamExt;
use game_core::{
    DictionaryValidator, FixedWord, GuessValidator, LengthOnlyValidator, SecretWord, WordList,
};
use game_server::create_routes;
use game_server::game_manager::GameManager;
use game_server::websocket::rate_limiter::RateLimitConfig;
use game_types::{ClientMessage, ServerMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use warp::test::WsClient;

/// Game manager whose every round has the given secret
pub fn create_manager_with_secret(secret: &str, validator: Arc<dyn GuessValidator>) -> Arc<GameManager> {
    let secret = SecretWord::parse(secret).unwrap();
    Arc::new(GameManager::new(Box::new(FixedWord(secret)), validator))
}

pub fn length_only() -> Arc<dyn GuessValidator> {
    Arc::new(LengthOnlyValidator)
}

/// Validator backed by a small offline dictionary
pub fn offline_dictionary() -> Arc<dyn GuessValidator> {
    let words = WordList::from_word_list("blade\ntable\nzebra\nspoon\nknife\nrisen");
    Arc::new(DictionaryValidator::new(words))
}

pub async fn connect(game_manager: Arc<GameManager>, rate_limit: RateLimitConfig) -> WsClient {
    let routes = create_routes(game_manager, rate_limit);
    warp::test::ws()
        .path("/ws")
        .handshake(routes)
        .await
        .expect("WebSocket handshake failed")
}

pub async fn send(client: &mut WsClient, message: &ClientMessage) {
    client
        .send(warp::ws::Message::text(serde_json::to_string(message).unwrap()))
        .await;
}

pub async fn send_keys(client: &mut WsClient, keys: &[&str]) {
    for key in keys {
        send(client, &ClientMessage::Key { key: key.to_string() }).await;
    }
}

pub async fn recv(client: &mut WsClient) -> ServerMessage {
    let message = timeout(Duration::from_secs(1), client.next())
        .await
        .expect("Timeout waiting for server message")
        .expect("WebSocket closed")
        .expect("WebSocket error");
    serde_json::from_str(message.to_str().unwrap()).unwrap()
}

/// Asserts nothing else arrives within a short window
pub async fn assert_quiet(client: &mut WsClient) {
    let next = timeout(Duration::from_millis(100), client.next()).await;
    assert!(next.is_err(), "Unexpected message: {:?}", next);
}

pub fn type_word(word: &str) -> Vec<String> {
    let mut keys: Vec<String> = word.chars().map(|ch| ch.to_string()).collect();
    keys.push("Enter".to_string());
    keys
}
