use crate::models::Habit;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything the page renders from: the fetched habits and whether the
/// initial load is still in flight.
#[derive(Debug, Clone)]
pub struct BattleLog {
    pub habits: Vec<Habit>,
    pub is_loading: bool,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            is_loading: true,
        }
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    pub board: Arc<Mutex<BattleLog>>,
}

impl AppState {
    pub fn new(board: BattleLog) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }
}
