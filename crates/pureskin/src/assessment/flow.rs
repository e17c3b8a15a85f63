use serde::{Deserialize, Serialize};

/// Linear wizard sequence a session walks from first visit to result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    Landing,
    Quiz,
    Guide,
    Camera,
    Analyzing,
    Result,
}

impl AssessmentStep {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Landing,
            Self::Quiz,
            Self::Guide,
            Self::Camera,
            Self::Analyzing,
            Self::Result,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Quiz => "quiz",
            Self::Guide => "guide",
            Self::Camera => "camera",
            Self::Analyzing => "analyzing",
            Self::Result => "result",
        }
    }

    /// Apply a trigger. `Restart` is legal from any step; every other
    /// trigger is legal from exactly one step.
    pub fn advance(self, trigger: FlowTrigger) -> Result<Self, FlowError> {
        match (self, trigger) {
            (_, FlowTrigger::Restart) => Ok(Self::Landing),
            (Self::Landing, FlowTrigger::Begin) => Ok(Self::Quiz),
            (Self::Quiz, FlowTrigger::CompleteQuiz) => Ok(Self::Guide),
            (Self::Guide, FlowTrigger::AcknowledgeGuide) => Ok(Self::Camera),
            (Self::Camera, FlowTrigger::FinishCapture) => Ok(Self::Analyzing),
            (Self::Analyzing, FlowTrigger::CompleteAnalysis) => Ok(Self::Result),
            (step, trigger) => Err(FlowError::InvalidTransition { step, trigger }),
        }
    }
}

/// Events that move a session between wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTrigger {
    Begin,
    CompleteQuiz,
    AcknowledgeGuide,
    FinishCapture,
    CompleteAnalysis,
    Restart,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("trigger {trigger:?} is not valid from step {step:?}")]
    InvalidTransition {
        step: AssessmentStep,
        trigger: FlowTrigger,
    },
}
