//! In-memory user directory behind the public `/api/user` routes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;

/// A stored user record.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Process-local user storage.
#[derive(Default)]
pub struct UserStore {
    users: Mutex<HashMap<i64, UserRecord>>,
    next_id: AtomicI64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new record and returns its id.
    pub fn insert(&self, first_name: &str, last_name: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = UserRecord {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        self.users
            .lock()
            .expect("user store lock poisoned")
            .insert(id, record);
        id
    }

    pub fn get(&self, id: i64) -> Option<UserRecord> {
        self.users
            .lock()
            .expect("user store lock poisoned")
            .get(&id)
            .cloned()
    }
}

/// Creates a user and answers with its id.
#[post("/api/user/{last_name}/{first_name}")]
pub async fn create_user(
    path: web::Path<(String, String)>,
    store: web::Data<UserStore>,
) -> impl Responder {
    let (last_name, first_name) = path.into_inner();
    let id = store.insert(&first_name, &last_name);
    log::debug!("created user {} ({} {})", id, first_name, last_name);
    HttpResponse::Ok().body(id.to_string())
}

/// Fetches a user by id.
#[get("/api/user/{id}")]
pub async fn get_user(path: web::Path<i64>, store: web::Data<UserStore>) -> impl Responder {
    match store.get(path.into_inner()) {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound().finish(),
    }
}
