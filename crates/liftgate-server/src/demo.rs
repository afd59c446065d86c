//! Demo elevator sessions and their JSON API.
//!
//! Each session owns one [`Elevator`] and is addressed by a v4 UUID. The
//! table is bounded; creating a session past the cap evicts the oldest
//! one. Sessions have no timers of their own, the page script drives
//! them with `tick` requests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftgate_sim::{Elevator, ElevatorSnapshot};

use crate::error::error_response;
use crate::state::AppState;

/// Most sessions held at once; the oldest is evicted beyond this.
pub const MAX_SESSIONS: usize = 256;

// ============================================================================
// Session table
// ============================================================================

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, Elevator>,
    /// Creation order, oldest first.
    order: VecDeque<Uuid>,
}

/// Bounded table of live demo sessions.
#[derive(Default)]
pub struct SessionTable {
    inner: Mutex<Sessions>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a fresh session, evicting the oldest past [`MAX_SESSIONS`].
    pub fn create(&self) -> (Uuid, ElevatorSnapshot) {
        let mut sessions = self.lock();
        while sessions.order.len() >= MAX_SESSIONS {
            if let Some(oldest) = sessions.order.pop_front() {
                sessions.by_id.remove(&oldest);
                log::debug!("evicted demo session {oldest}");
            }
        }

        let id = Uuid::new_v4();
        let car = Elevator::new();
        let snapshot = car.snapshot();
        sessions.by_id.insert(id, car);
        sessions.order.push_back(id);
        (id, snapshot)
    }

    /// Run `f` against a session's elevator, if the session exists.
    pub fn with<T>(&self, id: &Uuid, f: impl FnOnce(&mut Elevator) -> T) -> Option<T> {
        self.lock().by_id.get_mut(id).map(f)
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// A session's id plus its elevator state.
#[derive(Debug, Serialize)]
pub struct SessionBody {
    pub id: Uuid,
    #[serde(flatten)]
    pub elevator: ElevatorSnapshot,
}

/// Body of `POST /api/demo/{id}/call`.
#[derive(Debug, Deserialize)]
pub struct CallBody {
    pub floor: u8,
}

/// Response to a call: whether the press was accepted, plus state.
#[derive(Debug, Serialize)]
pub struct CallOutcome {
    pub id: Uuid,
    pub accepted: bool,
    #[serde(flatten)]
    pub elevator: ElevatorSnapshot,
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /api/demo`: open a new session.
pub async fn create_session(State(state): State<Arc<AppState>>) -> Response {
    let (id, elevator) = state.sessions().create();
    log::info!("demo session {id} created");
    (StatusCode::CREATED, Json(SessionBody { id, elevator })).into_response()
}

/// `GET /api/demo/{id}`: current state.
pub async fn session_state(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.sessions().with(&id, |car| car.snapshot()) {
        Some(elevator) => Json(SessionBody { id, elevator }).into_response(),
        None => unknown_session(id),
    }
}

/// `POST /api/demo/{id}/call`: press a floor button.
///
/// A rejected press (car busy, floor out of range, already queued) is a
/// normal outcome, not an error.
pub async fn call_floor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<CallBody>,
) -> Response {
    let outcome = state.sessions().with(&id, |car| {
        let accepted = car.press(body.floor);
        (accepted, car.snapshot())
    });

    match outcome {
        Some((accepted, elevator)) => Json(CallOutcome {
            id,
            accepted,
            elevator,
        })
        .into_response(),
        None => unknown_session(id),
    }
}

/// `POST /api/demo/{id}/tick`: advance the simulation one step.
pub async fn tick_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    let snapshot = state.sessions().with(&id, |car| {
        car.tick();
        car.snapshot()
    });

    match snapshot {
        Some(elevator) => Json(SessionBody { id, elevator }).into_response(),
        None => unknown_session(id),
    }
}

fn unknown_session(id: Uuid) -> Response {
    log::debug!("unknown demo session {id}");
    error_response(StatusCode::NOT_FOUND, "demo", "unknown demo session")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use liftgate_sim::CarState;

    #[test]
    fn test_create_and_inspect_session() {
        let table = SessionTable::new();
        let (id, snapshot) = table.create();

        assert_eq!(snapshot.current_floor, 1);
        assert_eq!(snapshot.state, CarState::Idle);
        assert_eq!(table.len(), 1);

        let floor = table.with(&id, |car| car.current_floor()).unwrap();
        assert_eq!(floor, 1);
    }

    #[test]
    fn test_with_unknown_session_is_none() {
        let table = SessionTable::new();
        assert!(table.with(&Uuid::new_v4(), |car| car.current_floor()).is_none());
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let table = SessionTable::new();
        let (first, _) = table.create();
        for _ in 0..MAX_SESSIONS {
            table.create();
        }

        assert_eq!(table.len(), MAX_SESSIONS);
        assert!(table.with(&first, |_| ()).is_none());
    }

    #[test]
    fn test_session_body_flattens_elevator() {
        let (id, elevator) = SessionTable::new().create();
        let json = serde_json::to_value(SessionBody { id, elevator }).unwrap();

        assert_eq!(json["id"], serde_json::json!(id));
        assert_eq!(json["current_floor"], 1);
        assert_eq!(json["state"], "idle");
        assert_eq!(json["floors"], 10);
    }
}
