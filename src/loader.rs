use crate::errors::LoadError;
use crate::models::{Habit, HabitsEnvelope};
use crate::state::{AppState, BattleLog};
use tracing::{debug, error, info};

/// Client for the external habits endpoint.
#[derive(Debug, Clone)]
pub struct HabitClient {
    client: reqwest::Client,
    url: String,
}

impl HabitClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one request. `Ok(None)` means the endpoint answered with a
    /// non-OK status, which carries no habits.
    pub async fn fetch(&self) -> Result<Option<Vec<Habit>>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "habits endpoint returned no data");
            return Ok(None);
        }

        let body = response.bytes().await?;
        let envelope: HabitsEnvelope = serde_json::from_slice(&body)?;
        Ok(Some(envelope.data))
    }
}

/// Folds a settled request into the board. Loading always ends; the held
/// list is replaced only when habits arrived.
pub fn apply_fetch_result(board: &mut BattleLog, result: Result<Option<Vec<Habit>>, LoadError>) {
    match result {
        Ok(Some(habits)) => {
            info!(count = habits.len(), "loaded habits");
            board.habits = habits;
        }
        Ok(None) => {}
        Err(err) => error!(error = %err, "error fetching habits"),
    }
    board.is_loading = false;
}

pub async fn load_habits(client: &HabitClient, state: &AppState) {
    let result = client.fetch().await;
    let mut board = state.board.lock().await;
    apply_fetch_result(&mut board, result);
}
