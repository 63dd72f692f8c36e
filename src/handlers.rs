use crate::models::{BattleLogResponse, Habit, HabitCard};
use crate::state::AppState;
use crate::stats::calculate_statistics;
use crate::ui::{Icon, render_index};
use axum::{Json, extract::State, response::Html};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let board = state.board.lock().await;
    Html(render_index(&board))
}

pub async fn get_battle_log(State(state): State<AppState>) -> Json<BattleLogResponse> {
    let board = state.board.lock().await;
    let habits = if board.is_loading {
        Vec::new()
    } else {
        board.habits.iter().map(to_card).collect()
    };

    Json(BattleLogResponse {
        loading: board.is_loading,
        habits,
    })
}

fn to_card(habit: &Habit) -> HabitCard {
    HabitCard {
        id: habit.id.clone(),
        name: habit.name.clone(),
        kind: habit.kind.clone(),
        status: habit.status,
        icon: Icon::for_kind(&habit.kind).map(Icon::name),
        statistics: calculate_statistics(&habit.calendar_entries),
    }
}
