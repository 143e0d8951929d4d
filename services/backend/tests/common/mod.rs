//! Common test utilities and fixtures for integration tests
#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum_test::TestServer;
use lottery_backend::{
    build_router,
    config::Config,
    errors::{AppError, Result},
    generators::{Clock, IdGenerator},
    repository::InMemoryBetRepository,
    state::AppState,
};
use serde_json::Value;
use shared::{BetId, CreationDate};

pub const FIXED_DATE: &str = "2024-05-01T12:00:00.000Z";

/// Deterministic ids: `bet-1`, `bet-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> Result<BetId> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        BetId::try_from(format!("bet-{}", n))
            .map_err(|e| AppError::IdentityGeneration(e.to_string()))
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Result<CreationDate> {
        CreationDate::try_from(FIXED_DATE).map_err(|e| AppError::Clock(e.to_string()))
    }
}

/// Test fixtures: a router over in-memory storage with pinned collaborators
pub struct TestContext {
    pub server: TestServer,
    pub repository: Arc<InMemoryBetRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryBetRepository::new());
        let state = AppState::with_collaborators(
            Config::default(),
            repository.clone(),
            Arc::new(SequentialIds::default()),
            Arc::new(FixedClock),
        );

        let server = TestServer::new(build_router(state)).expect("Failed to start test server");

        Self { server, repository }
    }
}

/// Helper function to parse error response
pub fn parse_error(body: &Value) -> Option<(String, String, String)> {
    let error = body.get("error")?;

    Some((
        error.get("code")?.as_str()?.to_string(),
        error.get("message")?.as_str()?.to_string(),
        error.get("category")?.as_str()?.to_string(),
    ))
}
