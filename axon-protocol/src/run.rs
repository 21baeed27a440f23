//! Run conditions and run configuration.
//!
//! Data only. How a runtime interprets these — stepping a simulation,
//! driving hardware — is outside this crate; the types exist so every
//! backend and runtime speaks the same vocabulary.

use serde::{Deserialize, Serialize};

/// How long a run lasts.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RunCondition {
    /// Run for a fixed number of timesteps.
    Steps {
        /// Number of timesteps to execute.
        num_steps: u64,
        /// Whether the caller blocks until the steps complete.
        blocking: bool,
    },
    /// Run until explicitly stopped.
    Continuous,
}

impl RunCondition {
    /// A blocking run of `num_steps` timesteps.
    pub fn steps(num_steps: u64) -> Self {
        RunCondition::Steps {
            num_steps,
            blocking: true,
        }
    }
}

/// Which substrate executes the network.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunTarget {
    /// Software simulation.
    Simulation,
    /// Neuromorphic hardware.
    Hardware,
}

/// Run configuration: target substrate plus model-selection hints.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCfg {
    /// Substrate to execute on.
    pub target: RunTarget,
    /// Tag steering model selection (e.g. `"fixed_pt"`, `"floating_pt"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_tag: Option<String>,
    /// Backend-specific extension data.
    #[serde(default)]
    pub options: serde_json::Value,
}

impl RunCfg {
    /// Configuration targeting software simulation.
    pub fn simulation() -> Self {
        Self {
            target: RunTarget::Simulation,
            select_tag: None,
            options: serde_json::Value::Null,
        }
    }

    /// Configuration targeting neuromorphic hardware.
    pub fn hardware() -> Self {
        Self {
            target: RunTarget::Hardware,
            select_tag: None,
            options: serde_json::Value::Null,
        }
    }

    /// Set the model-selection tag.
    pub fn with_select_tag(mut self, tag: impl Into<String>) -> Self {
        self.select_tag = Some(tag.into());
        self
    }
}
