// tests/support/helpers.rs
use super::mocks::{FixedClock, FlakyUserRepo, LeakedPasswords, StrictPasswordHasher};
use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use chrono::Duration;
use quire::application::{
    ports::security::TokenManager, services::ApplicationServices,
};
use quire::domain::article::{Article, ArticleRepository};
use quire::domain::category::{Category, CategoryId, CategoryRepository, CategoryTitle};
use quire::domain::user::{Email, PasswordHash, Principal, Role, User, UserRepository};
use quire::infrastructure::{repositories::InMemoryStore, security::token::BiscuitTokenManager};
use quire::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_PRIVATE_KEY: &str =
    "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Services wired over one in-memory store, with a fixed clock and the
/// deterministic test hasher.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub users: Arc<FlakyUserRepo>,
    pub services: Arc<ApplicationServices>,
    pub tokens: Arc<dyn TokenManager>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let users = Arc::new(FlakyUserRepo::new(Arc::clone(&store)));
        let clock = Arc::new(FixedClock);
        let tokens: Arc<dyn TokenManager> = Arc::new(
            BiscuitTokenManager::new(TEST_PRIVATE_KEY, Duration::hours(1), clock.clone())
                .expect("valid test key"),
        );

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(StrictPasswordHasher),
            Arc::clone(&tokens),
            Arc::new(LeakedPasswords),
            clock,
        ));

        Self {
            store,
            users,
            services,
            tokens,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }

    /// Stores a user whose password hash is `hash::{password}`.
    pub async fn seed_user(&self, email: &str, password: &str, role: Role) -> User {
        let user = User::new(
            Email::new(email).unwrap(),
            PasswordHash::new(format!("hash::{password}")).unwrap(),
            role,
        );
        UserRepository::insert_or_update(self.store.as_ref(), user)
            .await
            .unwrap()
    }

    pub async fn seed_category(&self, title: &str) -> CategoryId {
        let category = Category::new(CategoryTitle::new(title).unwrap());
        CategoryRepository::insert_or_update(self.store.as_ref(), category)
            .await
            .unwrap()
            .id
            .unwrap()
    }

    /// Inserts directly, keeping the builder's timestamps.
    pub async fn seed_article(&self, article: Article) -> Article {
        ArticleRepository::insert_or_update(self.store.as_ref(), article)
            .await
            .unwrap()
    }

    pub async fn stored_hash(&self, user: &User) -> String {
        UserRepository::find_by_id(self.store.as_ref(), user.id.unwrap())
            .await
            .unwrap()
            .unwrap()
            .password_hash
            .as_str()
            .to_string()
    }

    pub async fn bearer(&self, user: &User) -> String {
        let token = self
            .tokens
            .issue(quire::application::dto::TokenSubject {
                user_id: user.id.unwrap(),
                email: user.email.clone(),
                role: user.role,
            })
            .await
            .unwrap();
        format!("Bearer {}", token.token)
    }
}

pub fn principal(user: &User) -> Principal {
    Principal::user(user.id.unwrap(), user.email.clone(), user.role)
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
