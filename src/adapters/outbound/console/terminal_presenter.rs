use crate::application::read_models::{
    DashboardReadModel, EventRowView, StatCardsView, EMPTY_STATE_HINT,
};
use crate::monitoring::policies::SeverityClass;
use crate::ports::outbound::DashboardPresenter;
use crate::shared::error::MonitorError;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::{IsTerminal, Write};
use std::time::Duration;

/// Longest payload excerpt shown in a table row
const PAYLOAD_WIDTH: usize = 40;

const COMMAND_HINT: &str = "Commands: allow <id> | block <id> | refresh | dismiss | quit";

/// TerminalPresenter adapter for rendering the dashboard on stdout
///
/// This adapter implements the DashboardPresenter port. Each frame clears the
/// screen and redraws the whole dashboard. While the initial load is in
/// progress an indicatif spinner is shown on stderr instead.
pub struct TerminalPresenter {
    color: bool,
    redraw: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl TerminalPresenter {
    /// Colours output only when stdout is a terminal
    pub fn new() -> Self {
        Self::with_color(std::io::stdout().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self {
            color,
            redraw: true,
            spinner: RefCell::new(None),
        }
    }

    /// When disabled, frames are appended instead of clearing the screen
    pub fn with_redraw(mut self, redraw: bool) -> Self {
        self.redraw = redraw;
        self
    }

    /// Renders one frame as text
    pub fn render(&self, dashboard: &DashboardReadModel) -> String {
        let mut lines = vec![self.paint("WAFGuard Security Dashboard", |s| {
            s.bold().to_string()
        })];
        lines.push(String::new());

        if let Some(error) = &dashboard.error_banner {
            lines.push(self.paint(
                &format!("Error: {} (type 'dismiss' to hide)", error),
                |s| s.red().bold().to_string(),
            ));
            lines.push(String::new());
        }

        if let Some(cards) = &dashboard.stat_cards {
            lines.push(Self::render_stat_cards(cards));
            lines.push(String::new());
        }

        lines.push(self.paint(&dashboard.events_heading(), |s| s.bold().to_string()));
        if dashboard.has_events() {
            lines.push(format!(
                "{:<8} {:<24} {:<16} {:<9} {:<6} {:<width$} {:<24} {}",
                "ID",
                "TIME",
                "SOURCE IP",
                "RULE",
                "CLASS",
                "PAYLOAD",
                "TARGET",
                "STATUS",
                width = PAYLOAD_WIDTH
            ));
            lines.extend(dashboard.events.iter().map(|row| self.render_row(row)));
        } else {
            lines.push(EMPTY_STATE_HINT.to_string());
        }

        lines.push(String::new());
        lines.push(self.paint(COMMAND_HINT, |s| s.dimmed().to_string()));
        lines.join("\n")
    }

    fn render_stat_cards(cards: &StatCardsView) -> String {
        format!(
            "Total Events: {} | Last Hour: {} | Top Attacker: {} | Most Triggered: {}",
            cards.total_events, cards.recent_events, cards.top_attacker, cards.most_triggered_rule
        )
    }

    fn render_row(&self, row: &EventRowView) -> String {
        let severity =
            self.paint_severity(row.severity, &format!("{:<6}", row.severity.label()));
        let status = match row.status.as_str() {
            "BLOCK" => self.paint(&row.status, |s| s.red().to_string()),
            "ALLOW" => self.paint(&row.status, |s| s.green().to_string()),
            _ => self.paint(&row.status, |s| s.yellow().to_string()),
        };

        format!(
            "{:<8} {:<24} {:<16} {:<9} {} {:<width$} {:<24} {}",
            row.id,
            row.time,
            row.source_ip,
            row.rule_id,
            severity,
            truncate(&row.payload, PAYLOAD_WIDTH),
            truncate(&row.target_uri, 24),
            status,
            width = PAYLOAD_WIDTH
        )
    }

    /// XSS red, SQLi orange-red, LFI yellow
    fn paint_severity(&self, class: SeverityClass, text: &str) -> String {
        match class {
            SeverityClass::CrossSiteScripting => self.paint(text, |s| s.red().bold().to_string()),
            SeverityClass::Injection => self.paint(text, |s| s.bright_red().to_string()),
            SeverityClass::PathTraversal => self.paint(text, |s| s.yellow().to_string()),
            SeverityClass::Unclassified => self.paint(text, |s| s.blue().to_string()),
        }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }

    fn show_spinner(&self) {
        let mut spinner = self.spinner.borrow_mut();
        if spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Loading security events...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *spinner = Some(pb);
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPresenter for TerminalPresenter {
    fn present(&self, dashboard: &DashboardReadModel) -> Result<()> {
        if dashboard.loading {
            self.show_spinner();
            return Ok(());
        }
        self.clear_spinner();

        let frame = self.render(dashboard);
        let mut stdout = std::io::stdout().lock();
        let write = |out: &mut std::io::StdoutLock<'_>| -> std::io::Result<()> {
            if self.redraw && self.color {
                // Clear screen, cursor home
                write!(out, "\x1b[2J\x1b[H")?;
            }
            writeln!(out, "{}", frame)?;
            out.flush()
        };
        write(&mut stdout).map_err(|e| MonitorError::TerminalError {
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
