use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Seed data in the shape the public placeholder API serves.
const FIXTURE: &str = include_str!("../fixtures/users.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

pub type Db = Arc<Vec<User>>;

pub fn seed_users() -> Vec<User> {
    serde_json::from_str(FIXTURE).expect("users fixture is valid JSON")
}

pub fn app() -> Router {
    app_with_users(seed_users())
}

pub fn app_with_users(users: Vec<User>) -> Router {
    let db: Db = Arc::new(users);
    Router::new()
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    tracing::debug!(count = db.len(), "serving users");
    Json(db.as_ref().clone())
}
