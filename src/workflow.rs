use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical status machine for an evaluation record.
///
/// The legacy coarse vocabulary (pendente/em_andamento/concluida/cancelada)
/// is derived from this one via [`EvaluationStatus::coarse`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    PendingResponse,
    AwaitingManager,
    UnderReview,
    ReturnedForAdjustment,
    Approved,
    Rejected,
    Archived,
}

pub const ALL_STATUSES: [EvaluationStatus; 7] = [
    EvaluationStatus::PendingResponse,
    EvaluationStatus::AwaitingManager,
    EvaluationStatus::UnderReview,
    EvaluationStatus::ReturnedForAdjustment,
    EvaluationStatus::Approved,
    EvaluationStatus::Rejected,
    EvaluationStatus::Archived,
];

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingResponse => "pending_response",
            Self::AwaitingManager => "awaiting_manager",
            Self::UnderReview => "under_review",
            Self::ReturnedForAdjustment => "returned_for_adjustment",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Archived => "archived",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Coarse legacy view kept for old call sites.
    pub fn coarse(&self) -> CoarseStatus {
        match self {
            Self::PendingResponse => CoarseStatus::Pendente,
            Self::AwaitingManager | Self::UnderReview | Self::ReturnedForAdjustment => {
                CoarseStatus::EmAndamento
            }
            Self::Approved | Self::Archived => CoarseStatus::Concluida,
            Self::Rejected => CoarseStatus::Cancelada,
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_response" => Ok(Self::PendingResponse),
            "awaiting_manager" => Ok(Self::AwaitingManager),
            "under_review" => Ok(Self::UnderReview),
            "returned_for_adjustment" => Ok(Self::ReturnedForAdjustment),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "archived" => Ok(Self::Archived),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoarseStatus {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondentType {
    Collaborator,
    Manager,
}

impl RespondentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collaborator => "collaborator",
            Self::Manager => "manager",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Approve,
    Reject,
    Return,
}

/// Legal transition table. Anything not listed here is rejected; callers must
/// surface that as a precondition failure, never coerce to a nearby state.
pub fn can_transition(from: EvaluationStatus, to: EvaluationStatus) -> bool {
    use EvaluationStatus::*;
    match from {
        PendingResponse => matches!(to, AwaitingManager | UnderReview | Archived),
        AwaitingManager => matches!(to, Approved | Rejected | ReturnedForAdjustment | Archived),
        UnderReview => matches!(to, AwaitingManager | Archived),
        ReturnedForAdjustment => matches!(to, UnderReview),
        Approved => matches!(to, Archived),
        Rejected => matches!(to, UnderReview),
        Archived => false,
    }
}

/// Whether a respondent may submit a questionnaire in the current status.
pub fn can_submit(respondent: RespondentType, current: EvaluationStatus) -> bool {
    use EvaluationStatus::*;
    match respondent {
        RespondentType::Collaborator => matches!(current, PendingResponse | UnderReview),
        RespondentType::Manager => matches!(current, AwaitingManager),
    }
}

/// Status after a questionnaire submission. Collaborator submissions move the
/// record to the manager's queue; a manager submission closes it as approved.
pub fn next_status_for_submit(
    respondent: RespondentType,
    current: EvaluationStatus,
) -> Option<EvaluationStatus> {
    use EvaluationStatus::*;
    match (respondent, current) {
        (RespondentType::Collaborator, PendingResponse | UnderReview) => Some(AwaitingManager),
        (RespondentType::Manager, AwaitingManager) => Some(Approved),
        _ => None,
    }
}

/// Status after a manager decision. `Return` from awaiting_manager is the
/// primary send-back-for-adjustment path; from approved/rejected it re-opens
/// the evaluation for review.
pub fn next_status_for_decision(
    action: DecisionAction,
    current: EvaluationStatus,
) -> Option<EvaluationStatus> {
    use EvaluationStatus::*;
    match (action, current) {
        (DecisionAction::Approve, AwaitingManager | ReturnedForAdjustment) => Some(Approved),
        (DecisionAction::Reject, AwaitingManager | ReturnedForAdjustment) => Some(Rejected),
        (DecisionAction::Return, AwaitingManager) => Some(ReturnedForAdjustment),
        (DecisionAction::Return, Approved | Rejected) => Some(UnderReview),
        _ => None,
    }
}
