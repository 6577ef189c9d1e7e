//! Swap scenarios.

use std::path::Path;

use anyhow::Context;
use quoteswap_session::SessionState;
use serde::{Deserialize, Serialize};

/// A scripted sequence of user actions against one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Steps in the scenario.
    pub steps: Vec<ScenarioStep>,
}

/// A step in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Choose the source currency.
    SelectFrom { currency: String },
    /// Choose the target currency.
    SelectTo { currency: String },
    /// Type into the amount field.
    EnterAmount { text: String },
    /// Submit the current fields and wait for the outcome.
    Submit,
    /// Submit without waiting; the outcome is collected by `Join`.
    SubmitInBackground,
    /// Wait for every background submit.
    Join,
    /// Swap direction.
    Reverse,
    /// Return to defaults.
    Reset,
    /// Pause, scaled by the simulation speed.
    Wait { millis: u64 },
    /// Check the session.
    Expect { condition: Expectation },
}

/// Conditions a scenario can check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Session is in this state.
    State(SessionState),
    /// Quoted amount text equals.
    ToAmount(String),
    /// Session carries the error with this code.
    Error(String),
}

impl Scenario {
    /// Names of the built-in scenarios.
    pub const BUILT_IN: &'static [&'static str] =
        &["basic-swap", "validation-errors", "reverse-direction", "reset-in-flight"];

    /// Load a built-in scenario by name, or a JSON scenario file.
    pub fn load(name: &str) -> anyhow::Result<Self> {
        match name {
            "basic-swap" => Ok(Self::basic_swap()),
            "validation-errors" => Ok(Self::validation_errors()),
            "reverse-direction" => Ok(Self::reverse_direction()),
            "reset-in-flight" => Ok(Self::reset_in_flight()),
            _ if Path::new(name).is_file() => Self::from_file(name),
            _ => Err(anyhow::anyhow!(
                "Unknown scenario: {} (built-in: {})",
                name,
                Self::BUILT_IN.join(", ")
            )),
        }
    }

    /// Read a scenario from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&payload).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// One ETH to USDC quote.
    fn basic_swap() -> Self {
        Self {
            name: "basic-swap".to_string(),
            description: "Quote 1 ETH in USDC".to_string(),
            steps: vec![
                ScenarioStep::EnterAmount { text: "1".to_string() },
                ScenarioStep::Submit,
                ScenarioStep::Expect {
                    condition: Expectation::State(SessionState::Success),
                },
            ],
        }
    }

    /// Each validation rule in turn.
    fn validation_errors() -> Self {
        Self {
            name: "validation-errors".to_string(),
            description: "Trip every validation rule".to_string(),
            steps: vec![
                ScenarioStep::EnterAmount { text: "-1".to_string() },
                ScenarioStep::Submit,
                ScenarioStep::Expect {
                    condition: Expectation::Error("INVALID_AMOUNT".to_string()),
                },
                ScenarioStep::EnterAmount { text: "1".to_string() },
                ScenarioStep::SelectTo { currency: String::new() },
                ScenarioStep::Submit,
                ScenarioStep::Expect {
                    condition: Expectation::Error("MISSING_CURRENCIES".to_string()),
                },
                ScenarioStep::SelectTo { currency: "ETH".to_string() },
                ScenarioStep::Submit,
                ScenarioStep::Expect {
                    condition: Expectation::Error("SAME_CURRENCIES".to_string()),
                },
                ScenarioStep::SelectTo { currency: "BTC".to_string() },
                ScenarioStep::Submit,
                ScenarioStep::Expect {
                    condition: Expectation::Error("PRICE_DATA_UNAVAILABLE".to_string()),
                },
                ScenarioStep::Expect {
                    condition: Expectation::ToAmount(String::new()),
                },
            ],
        }
    }

    /// Quote, flip, quote again.
    fn reverse_direction() -> Self {
        Self {
            name: "reverse-direction".to_string(),
            description: "Reverse after a quote and resubmit".to_string(),
            steps: vec![
                ScenarioStep::SelectFrom { currency: "ATOM".to_string() },
                ScenarioStep::SelectTo { currency: "OSMO".to_string() },
                ScenarioStep::EnterAmount { text: "10".to_string() },
                ScenarioStep::Submit,
                ScenarioStep::Reverse,
                ScenarioStep::Expect {
                    condition: Expectation::ToAmount("10".to_string()),
                },
                ScenarioStep::Submit,
                ScenarioStep::Reverse,
            ],
        }
    }

    /// Reset while a quote is pending.
    fn reset_in_flight() -> Self {
        Self {
            name: "reset-in-flight".to_string(),
            description: "Reset during the submit latency; the quote is dropped".to_string(),
            steps: vec![
                ScenarioStep::SelectFrom { currency: "WBTC".to_string() },
                ScenarioStep::EnterAmount { text: "0.5".to_string() },
                ScenarioStep::SubmitInBackground,
                ScenarioStep::Wait { millis: 500 },
                ScenarioStep::Expect {
                    condition: Expectation::State(SessionState::Submitting),
                },
                ScenarioStep::Submit,
                ScenarioStep::Reset,
                ScenarioStep::Join,
                ScenarioStep::Expect {
                    condition: Expectation::State(SessionState::Idle),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_built_in() {
        for name in Scenario::BUILT_IN {
            let scenario = Scenario::load(name).unwrap();
            assert_eq!(scenario.name, *name);
            assert!(!scenario.steps.is_empty());
        }
    }

    #[test]
    fn test_unknown_scenario() {
        let err = Scenario::load("no-such-scenario").unwrap_err();
        assert!(err.to_string().contains("basic-swap"));
    }

    #[test]
    fn test_parse_scenario_json() {
        let payload = r#"{
            "name": "custom",
            "steps": [
                {"step": "select_from", "currency": "USDC"},
                {"step": "enter_amount", "text": "25"},
                {"step": "submit"},
                {"step": "expect", "condition": {"state": "SUCCESS"}},
                {"step": "expect", "condition": {"to_amount": "0.012500"}},
                {"step": "wait", "millis": 10}
            ]
        }"#;

        let scenario: Scenario = serde_json::from_str(payload).unwrap();

        assert_eq!(scenario.description, "");
        assert_eq!(scenario.steps.len(), 6);
        assert_eq!(
            scenario.steps[3],
            ScenarioStep::Expect {
                condition: Expectation::State(SessionState::Success)
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("quoteswap-scenario-{}.json", std::process::id()));
        let scenario = Scenario::load("basic-swap").unwrap();
        std::fs::write(&path, serde_json::to_string(&scenario).unwrap()).unwrap();

        let loaded = Scenario::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, scenario);
    }
}
