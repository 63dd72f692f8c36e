use crate::models::{Habit, HabitStatus, Statistics, WindowCounts};
use crate::state::BattleLog;
use crate::stats::calculate_statistics;

/// Category icons. Tags without one render no icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cigarette,
    Phone,
    Wine,
}

impl Icon {
    pub fn for_kind(kind: &str) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "smoking" => Some(Self::Cigarette),
            "scrolling" => Some(Self::Phone),
            "drink" => Some(Self::Wine),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cigarette => "cigarette",
            Self::Phone => "phone",
            Self::Wine => "wine",
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Self::Cigarette => {
                r#"<path d="M18 12H2v4h16"/><path d="M22 12v4"/><path d="M7 12v4"/><path d="M18 8c0-2.5-2-2.5-2-5"/><path d="M22 8c0-2.5-2-2.5-2-5"/>"#
            }
            Self::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Self::Wine => {
                r#"<path d="M8 22h8"/><path d="M7 10h10"/><path d="M12 15v7"/><path d="M12 15a5 5 0 0 0 5-5c0-2-.5-4-2-8H9c-1.5 4-2 6-2 8a5 5 0 0 0 5 5Z"/>"#
            }
        }
    }
}

const CHECK_PATHS: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#;
const CROSS_PATHS: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#;

pub fn status_text(status: HabitStatus) -> &'static str {
    match status {
        HabitStatus::Success => "You're doing great!",
        HabitStatus::Failed | HabitStatus::Unknown => "You lose.",
    }
}

pub fn render_index(board: &BattleLog) -> String {
    if board.is_loading {
        return LOADING_HTML.replace("{{STYLE}}", STYLE);
    }

    let cards: String = board
        .habits
        .iter()
        .map(|habit| render_habit_card(habit, &calculate_statistics(&habit.calendar_entries)))
        .collect();

    INDEX_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{CARDS}}", &cards)
}

pub fn render_habit_card(habit: &Habit, stats: &Statistics) -> String {
    let mut html = format!(
        r#"<article class="habit-card" data-habit-id="{}"><div class="habit-head">"#,
        escape_html(&habit.id)
    );
    if let Some(icon) = Icon::for_kind(&habit.kind) {
        html.push_str(&svg(icon.paths(), "icon", icon.name()));
    }

    let (class, paths) = match habit.status {
        HabitStatus::Success => ("status ok", CHECK_PATHS),
        HabitStatus::Failed | HabitStatus::Unknown => ("status bad", CROSS_PATHS),
    };
    html.push_str(&format!(
        r#"<div><h3>{}</h3><span class="{class}">{}{}</span></div></div>"#,
        escape_html(&habit.name),
        svg(paths, "icon-sm", "status"),
        escape_html(status_text(habit.status)),
    ));

    html.push_str(r#"<div class="windows">"#);
    for (label, counts) in [
        ("Weekly", stats.weekly),
        ("Monthly", stats.monthly),
        ("Annually", stats.annually),
    ] {
        html.push_str(&render_window(label, counts));
    }
    html.push_str("</div></article>");
    html
}

fn render_window(label: &str, counts: WindowCounts) -> String {
    format!(
        r#"<div class="window"><span class="label">{label}:</span> <span class="num ok">{}</span> / <span class="num bad">{}</span></div>"#,
        counts.success, counts.failed
    )
}

fn svg(paths: &str, class: &str, label: &str) -> String {
    format!(
        r#"<svg class="{class}" data-icon="{label}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{paths}</svg>"#
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
    :root {
      --bg: #f4f4f5;
      --ink: #18181b;
      --muted: #71717a;
      --card: #ffffff;
      --border: #e4e4e7;
      --ok: #16a34a;
      --bad: #dc2626;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: ui-sans-serif, system-ui, sans-serif;
    }

    .app {
      max-width: 56rem;
      margin: 0 auto;
      padding: 1rem;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 0.75rem;
      box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }

    .card > header {
      padding: 1.5rem 1.5rem 0;
    }

    .card > header h2 {
      display: flex;
      align-items: center;
      gap: 0.5rem;
      margin: 0;
      font-size: 1.5rem;
    }

    .badge {
      padding: 0.5rem;
      background: var(--bg);
      border-radius: 0.5rem;
    }

    .content {
      display: grid;
      gap: 1.5rem;
      padding: 1.5rem;
    }

    .habit-card {
      border: 1px solid var(--border);
      border-radius: 0.75rem;
      padding: 1rem;
    }

    .habit-head {
      display: flex;
      align-items: center;
      gap: 0.75rem;
    }

    .habit-head h3 {
      margin: 0;
      font-weight: 600;
    }

    .icon {
      width: 1.5rem;
      height: 1.5rem;
    }

    .icon-sm {
      width: 1rem;
      height: 1rem;
    }

    .status {
      display: inline-flex;
      align-items: center;
      gap: 0.25rem;
      font-size: 0.875rem;
    }

    .ok {
      color: var(--ok);
    }

    .bad {
      color: var(--bad);
    }

    .windows {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 1rem;
      margin-top: 1rem;
      font-size: 0.875rem;
    }

    .label {
      color: var(--muted);
    }

    .num {
      font-family: ui-monospace, monospace;
    }

    .loading {
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 200px;
    }
"#;

const LOADING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta http-equiv="refresh" content="1" />
  <title>Battle Log</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <div class="loading">Loading habits...</div>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Battle Log</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <section class="card">
      <header>
        <h2><span class="badge">🥊</span>Battle Log</h2>
      </header>
      <div class="content">{{CARDS}}</div>
    </section>
  </main>
</body>
</html>
"#;
