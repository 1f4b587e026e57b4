//! In-memory stand-in for the hosted users collection.
//!
//! Ids are sequential decimal strings starting at `"1"`, the way hosted mock
//! APIs hand them out, and the list keeps insertion order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of both POST and PUT.
#[derive(Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

#[derive(Default)]
pub struct Store {
    users: Vec<User>,
    next_id: u64,
}

impl Store {
    fn insert(&mut self, input: UserInput) -> User {
        self.next_id += 1;
        let user = User {
            id: self.next_id.to_string(),
            name: input.name,
            email: input.email,
        };
        self.users.push(user.clone());
        user
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users.clone())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserInput>,
) -> (StatusCode, Json<User>) {
    let user = db.write().await.insert(input);
    debug!(id = %user.id, "created user");
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.find_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.email = input.email;
    debug!(%id, "updated user");
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.users.len();
    store.users.retain(|u| u.id != id);
    if store.users.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    debug!(%id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}
