//! Colorful console output for planner runs.
//!
//! Provides a custom `tracing` layer that formats search events with colors
//! on stderr, leaving stdout to the plan itself.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end, roster saved
//! - **DEBUG**: Roster loaded, search completion and accepted candidates
//! - **TRACE**: Individual generated moves

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "vaultplan=info";

/// Initializes console output at the default level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initializes console output, using `directive` when `RUST_LOG` is unset.
pub fn init_with_directive(directive: &str) {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

/// Maps a `-v` count to a filter directive.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_DIRECTIVE,
        1 => "vaultplan=debug",
        _ => "vaultplan=trace",
    }
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("vaultplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    policy: Option<String>,
    path: Option<String>,
    from: Option<String>,
    to: Option<String>,
    dweller_count: Option<u64>,
    maxed_count: Option<u64>,
    move_count: Option<u64>,
    depth: Option<u64>,
    nodes: Option<u64>,
    moves: Option<u64>,
    expansions: Option<u64>,
    dweller: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    score: Option<i64>,
    delta: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "policy" => self.policy = Some(s),
            "path" => self.path = Some(s),
            "from" => self.from = Some(s),
            "to" => self.to = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "dweller_count" => self.dweller_count = Some(value),
            "maxed_count" => self.maxed_count = Some(value),
            "move_count" => self.move_count = Some(value),
            "depth" => self.depth = Some(value),
            "nodes" => self.nodes = Some(value),
            "moves" => self.moves = Some(value),
            "expansions" => self.expansions = Some(value),
            "dweller" => self.dweller = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "score" => self.score = Some(value as i64),
            "delta" => self.delta = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "score" => self.score = Some(value),
            "delta" => self.delta = Some(value),
            _ if value >= 0 => self.record_u64(field, value as u64),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "policy" => self.policy = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "from" => self.from = Some(value.to_string()),
            "to" => self.to = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "roster_loaded" => format_roster(v, "Loaded"),
        "roster_saved" => format_roster(v, "Saved"),
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "chain_explored" => format_chain_explored(v),
        "candidate_accepted" => format_candidate(v),
        "move" => format_move(v, level),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let dwellers = v.dweller_count.unwrap_or(0);
    let maxed = v.maxed_count.unwrap_or(0);
    let depth = v.depth.unwrap_or(0);
    let policy = v.policy.as_deref().unwrap_or("unknown");

    let mut output = format!(
        "{} Planning │ {} dwellers │ {} moves available │ depth {} │ {}",
        "▶".bright_green().bold(),
        dwellers.to_formatted_string(&Locale::en).bright_yellow(),
        v.move_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        depth.bright_yellow(),
        policy.white().bold()
    );

    if maxed > 0 {
        output.push_str(&format!(" │ {} maxed", maxed.bright_red()));
    }

    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let nodes = v.nodes.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let result = match (v.score, v.moves) {
        (Some(score), Some(moves)) => format!("{} moves │ score {}", moves, format_score(score)),
        _ => "no winner".bright_red().bold().to_string(),
    };

    format!(
        "{} Planning complete │ {} │ {} nodes │ {} nodes/s │ {}",
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        nodes.to_formatted_string(&Locale::en).white(),
        v.speed
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        result
    )
}

fn format_roster(v: &EventVisitor, verb: &str) -> String {
    format!(
        "{} {} roster │ {} │ {} dwellers",
        "●".bright_blue(),
        verb,
        v.path.as_deref().unwrap_or("?").white().bold(),
        v.dweller_count.unwrap_or(0).to_formatted_string(&Locale::en)
    )
}

fn format_chain_explored(v: &EventVisitor) -> String {
    format!(
        "{} Explored depth {} │ {} nodes │ {} expansions",
        "◀".bright_blue(),
        v.depth.unwrap_or(0),
        v.nodes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        v.expansions.unwrap_or(0).to_formatted_string(&Locale::en)
    )
}

fn format_candidate(v: &EventVisitor) -> String {
    format!(
        "{} Candidate │ {} moves │ score {}",
        "✓".bright_green(),
        v.moves.unwrap_or(0),
        format_score(v.score.unwrap_or(0))
    )
}

fn format_move(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "  Move │ #{} {} -> {} │ {}",
        v.dweller.unwrap_or(0),
        v.from.as_deref().unwrap_or("?"),
        v.to.as_deref().unwrap_or("?"),
        format_score(v.delta.unwrap_or(0))
    )
    .bright_black()
    .to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: i64) -> String {
    if score < 0 {
        score.bright_red().to_string()
    } else if score > 0 {
        score.bright_green().to_string()
    } else {
        score.white().to_string()
    }
}
