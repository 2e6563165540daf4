//! Progress reporting for analyses and batch runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sarcasm_application::ports::progress::{AnalysisProgress, BatchProgress};
use sarcasm_application::{BatchReport, BatchRow};
use sarcasm_domain::{AgentResult, AnalysisPhase, AnalysisResult, Perspective};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that follows one analysis through its phases
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress for ProgressReporter {
    fn on_phase_start(&self, phase: &AnalysisPhase) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(phase.display_name());
        pb.set_message("");
    }

    fn on_team_selected(&self, team: &[Perspective]) {
        let names = team.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ");
        self.with_spinner(|pb| pb.println(format!("{} Team: {}", "->".cyan(), names)));
    }

    fn on_agent_activated(&self, perspective: Perspective, result: &AgentResult) {
        self.with_spinner(|pb| {
            pb.println(format!(
                "  {} {} [{}]",
                "+".green(),
                perspective,
                result.strength_label()
            ))
        });
    }

    fn on_agent_revised(&self, perspective: Perspective, result: &AgentResult) {
        self.with_spinner(|pb| {
            pb.println(format!(
                "  {} {} revised [{}]",
                "~".yellow(),
                perspective,
                result.strength_label()
            ))
        });
    }

    fn on_gate_decision(&self, round: usize, needs_reinforcement: bool) {
        let answer = if needs_reinforcement {
            "recruit".yellow()
        } else {
            "sufficient".green()
        };
        self.with_spinner(|pb| pb.println(format!("  {} Round {} gate: {}", "?".cyan(), round, answer)));
    }

    fn on_complete(&self, result: &AnalysisResult) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} {} after {} rounds",
            "v".green(),
            result.decision.to_string().bold(),
            result.rounds_completed
        );
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl AnalysisProgress for SimpleProgress {
    fn on_phase_start(&self, phase: &AnalysisPhase) {
        eprintln!("{} {}", "->".cyan(), phase.display_name().bold());
    }

    fn on_agent_activated(&self, perspective: Perspective, result: &AgentResult) {
        eprintln!("  {} {} [{}]", "+".green(), perspective, result.strength_label());
    }

    fn on_agent_revised(&self, perspective: Perspective, result: &AgentResult) {
        eprintln!("  {} {} revised [{}]", "~".yellow(), perspective, result.strength_label());
    }

    fn on_complete(&self, result: &AnalysisResult) {
        eprintln!("{} {}", "v".green(), result.decision);
    }
}

/// Progress bar over the records of a batch
pub struct BatchProgressBar {
    bar: Mutex<Option<ProgressBar>>,
}

impl BatchProgressBar {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for BatchProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgress for BatchProgressBar {
    fn on_batch_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Batch");
        pb.enable_steady_tick(Duration::from_millis(200));
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_record_complete(&self, row: &BatchRow) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            let status = if row.is_error() {
                format!("{} #{} {}", "x".red(), row.index, row.error.as_deref().unwrap_or(""))
            } else {
                format!("{} #{} {}", "v".green(), row.index, row.final_decision)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, report: &BatchReport) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!(
                "{} ({} failed)",
                "complete!".green(),
                report.failed()
            ));
        }
    }
}
