//! Interview sessions: per-session progress keyed by a session id.
//!
//! A session is created (or reused) by a successful résumé analysis, which
//! opens the interview gate. Each record sits behind its own async mutex so
//! turns of one session run one at a time while other sessions proceed.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::JobRole;

pub const MAX_QUESTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub question_count: u32,
    pub max_questions: u32,
    pub job_role: Option<JobRole>,
    pub resume_analyzed: bool,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            question_count: 0,
            max_questions: MAX_QUESTIONS,
            job_role: None,
            resume_analyzed: false,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn phase(&self) -> InterviewPhase {
        if self.question_count == 0 {
            InterviewPhase::NotStarted
        } else if self.question_count < self.max_questions {
            InterviewPhase::InProgress
        } else {
            InterviewPhase::Complete
        }
    }

    /// Records a successful résumé analysis for `job_role`.
    pub fn mark_analyzed(&mut self, job_role: JobRole) {
        self.resume_analyzed = true;
        self.job_role = Some(job_role);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

pub type SharedSession = Arc<Mutex<InterviewSession>>;

/// In-memory session map. Cheap to clone; all clones share one map.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Returns the session for `id`, creating it if `id` is unknown or absent.
    pub fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, SharedSession) {
        let id = id.unwrap_or_else(Uuid::new_v4);
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(InterviewSession::new(id))))
            .clone();
        (id, session)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drops sessions idle for longer than the TTL. Sessions whose lock is
    /// held (a turn is in flight) are kept. Returns the number removed.
    pub fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.idle_ttl;
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(s) => s.last_activity >= cutoff,
            Err(_) => true,
        });
        before - sessions.len()
    }
}
