use chrono::NaiveDate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use storage::models::{Hackathon, HackathonStatus, Team, User};

use crate::backend::{AnalysisMode, CompletionBackend, CompletionRequest};
use crate::error::BackendError;

pub fn member(id: i64, name: &str, skills: &[&str]) -> User {
    User {
        id,
        name: name.to_string(),
        college: "Code University".to_string(),
        email: format!("{}@code.edu", name.to_lowercase()),
        avatar_url: String::new(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        github: None,
        linkedin: None,
    }
}

pub fn team(id: i64, name: &str, members: Vec<User>) -> Team {
    Team {
        id,
        name: name.to_string(),
        members,
        team_code: "ABC123".to_string(),
        hackathon_id: 1,
    }
}

pub fn hackathon(required: &[&str]) -> Hackathon {
    let day = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    Hackathon {
        id: 1,
        title: "HackTheFuture".to_string(),
        organizer: "Tech University".to_string(),
        theme: "AI for Social Good".to_string(),
        image: String::new(),
        description: String::new(),
        registration_start: day,
        registration_end: day,
        event_start: day,
        event_end: day,
        status: HackathonStatus::Upcoming,
        register_link: String::new(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
    }
}

/// Backend double replying with fixed text, or failing like an unreachable service.
pub struct ScriptedBackend {
    reply: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_temperature: Mutex<Option<f32>>,
}

impl ScriptedBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_temperature: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_temperature(&self) -> Option<f32> {
        *self.last_temperature.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.clone());
        *self.last_temperature.lock().unwrap() = Some(request.temperature);

        self.reply.clone().ok_or(BackendError::StatusError {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Delegated
    }
}
