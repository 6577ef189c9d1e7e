//! Scenario runner.

use std::time::Duration;

use quoteswap_session::{SessionMetricsSnapshot, SessionView, SubmissionController, SubmitOutcome};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::scenario::{Expectation, Scenario, ScenarioStep};

/// How frames are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario: String,
    pub steps_run: usize,
    /// One label per submit, in completion order.
    pub outcomes: Vec<String>,
    pub final_view: SessionView,
    pub metrics: SessionMetricsSnapshot,
}

/// Replays scenarios against one session.
pub struct ScenarioRunner {
    controller: SubmissionController,
    /// Simulation speed multiplier.
    speed: f64,
    output: Option<OutputFormat>,
    background: Vec<JoinHandle<SubmitOutcome>>,
    outcomes: Vec<String>,
}

impl ScenarioRunner {
    /// Create a new runner.
    pub fn new(controller: SubmissionController, speed: f64) -> Self {
        Self {
            controller,
            speed,
            output: None,
            background: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    /// Print the session view after every step.
    pub fn with_output(mut self, format: OutputFormat) -> Self {
        self.output = Some(format);
        self
    }

    /// Run a scenario to the end, failing on the first unmet expectation.
    pub async fn run(&mut self, scenario: &Scenario) -> anyhow::Result<RunReport> {
        info!(scenario = %scenario.name, "Running scenario: {}", scenario.description);

        self.outcomes.clear();
        for (index, step) in scenario.steps.iter().enumerate() {
            debug!(index, ?step, "Executing step");
            self.execute_step(index, step).await?;
            self.emit(step)?;
        }
        self.join().await?;

        Ok(RunReport {
            scenario: scenario.name.clone(),
            steps_run: scenario.steps.len(),
            outcomes: self.outcomes.clone(),
            final_view: self.controller.view(),
            metrics: self.controller.metrics(),
        })
    }

    async fn execute_step(&mut self, index: usize, step: &ScenarioStep) -> anyhow::Result<()> {
        match step {
            ScenarioStep::SelectFrom { currency } => self.controller.select_from(currency.as_str()),
            ScenarioStep::SelectTo { currency } => self.controller.select_to(currency.as_str()),
            ScenarioStep::EnterAmount { text } => self.controller.enter_amount(text.as_str()),
            ScenarioStep::Submit => {
                let outcome = self.controller.submit_current().await;
                self.outcomes.push(describe(&outcome));
            }
            ScenarioStep::SubmitInBackground => {
                let controller = self.controller.clone();
                let mut submit = Box::pin(async move { controller.submit_current().await });
                // drive the submit up to its latency here so the next step
                // always sees it in flight
                tokio::select! {
                    biased;
                    outcome = &mut submit => self.outcomes.push(describe(&outcome)),
                    _ = std::future::ready(()) => self.background.push(tokio::spawn(submit)),
                }
            }
            ScenarioStep::Join => self.join().await?,
            ScenarioStep::Reverse => self.controller.reverse(),
            ScenarioStep::Reset => self.controller.reset(),
            ScenarioStep::Wait { millis } => {
                let delay = Duration::from_millis(*millis).div_f64(self.speed);
                tokio::time::sleep(delay).await;
            }
            ScenarioStep::Expect { condition } => self.check(index, condition)?,
        }

        Ok(())
    }

    async fn join(&mut self) -> anyhow::Result<()> {
        for handle in std::mem::take(&mut self.background) {
            let outcome = handle.await?;
            self.outcomes.push(describe(&outcome));
        }
        Ok(())
    }

    fn check(&self, index: usize, condition: &Expectation) -> anyhow::Result<()> {
        let session = self.controller.session();

        let (holds, actual) = match condition {
            Expectation::State(state) => (session.state() == *state, format!("{:?}", session.state())),
            Expectation::ToAmount(text) => (
                session.to_amount_text() == text,
                format!("{:?}", session.to_amount_text()),
            ),
            Expectation::Error(code) => {
                let actual = session.error().map(|kind| kind.error_code());
                (actual == Some(code.as_str()), format!("{:?}", actual))
            }
        };

        if !holds {
            anyhow::bail!("Step {}: expected {:?}, found {}", index, condition, actual);
        }
        Ok(())
    }

    fn emit(&self, step: &ScenarioStep) -> anyhow::Result<()> {
        let view = self.controller.view();
        match self.output {
            None => {}
            Some(OutputFormat::Json) => println!("{}", serde_json::to_string(&view)?),
            Some(OutputFormat::Text) => println!("{:<24} {}", step_label(step), render(&view)),
        }
        Ok(())
    }
}

/// Short label for an outcome.
pub fn describe(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Rejected => "rejected".to_string(),
        SubmitOutcome::Failed(kind) => format!("failed: {}", kind.error_code()),
        SubmitOutcome::Completed(quote) => format!("completed: {} {}", quote.to_amount, quote.pair.quote),
        SubmitOutcome::Discarded => "discarded".to_string(),
    }
}

fn step_label(step: &ScenarioStep) -> String {
    match step {
        ScenarioStep::SelectFrom { currency } => format!("select_from {}", currency),
        ScenarioStep::SelectTo { currency } => format!("select_to {}", currency),
        ScenarioStep::EnterAmount { text } => format!("enter_amount {:?}", text),
        ScenarioStep::Submit => "submit".to_string(),
        ScenarioStep::SubmitInBackground => "submit (background)".to_string(),
        ScenarioStep::Join => "join".to_string(),
        ScenarioStep::Reverse => "reverse".to_string(),
        ScenarioStep::Reset => "reset".to_string(),
        ScenarioStep::Wait { millis } => format!("wait {}ms", millis),
        ScenarioStep::Expect { .. } => "expect".to_string(),
    }
}

/// One-line text rendering of a view.
pub fn render(view: &SessionView) -> String {
    let mut line = format!(
        "[{:?}] {} {} -> {} {}",
        view.state, view.from_amount, view.from_currency, view.to_amount, view.to_currency
    );
    for part in [
        view.exchange_rate.as_deref(),
        view.from_estimate.as_deref(),
        view.amount_hint,
        view.error_message,
        view.success_message,
    ]
    .into_iter()
    .flatten()
    {
        line.push_str(" | ");
        line.push_str(part);
    }
    line
}
