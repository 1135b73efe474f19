use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable snapshot of the calculation settings in effect for one
/// aggregation. Resolved once per call by `PostgresService::resolve_settings`;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub method: CalcMethod,
    pub weights: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcMethod {
    SimpleAverage,
    Weighted,
}

impl CalcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleAverage => "simple_average",
            Self::Weighted => "weighted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "simple_average" => Some(Self::SimpleAverage),
            "weighted" => Some(Self::Weighted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub value: f64,
    pub weight: Option<f64>,
    pub criterion_id: Option<String>,
}

/// Aggregate answer scores into a single value, rounded to one decimal.
///
/// No settings means simple average. Weighted resolution per input:
/// settings weight for the criterion, else the input's own weight, else 1.
/// Empty input and zero weight-sum both yield 0, never an error.
pub fn aggregate(inputs: &[ScoreInput], settings: Option<&SettingsSnapshot>) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }

    let method = settings.map_or(CalcMethod::SimpleAverage, |s| s.method);

    match method {
        CalcMethod::SimpleAverage => {
            let sum: f64 = inputs.iter().map(|i| i.value).sum();
            round1(sum / inputs.len() as f64)
        }
        CalcMethod::Weighted => {
            let mut weighted_sum = 0.0;
            let mut weight_sum = 0.0;
            for input in inputs {
                let weight = input
                    .criterion_id
                    .as_deref()
                    .and_then(|c| settings.and_then(|s| s.weights.get(c)).copied())
                    .or(input.weight)
                    .unwrap_or(1.0);
                weighted_sum += input.value * weight;
                weight_sum += weight;
            }
            if weight_sum == 0.0 {
                return 0.0;
            }
            round1(weighted_sum / weight_sum)
        }
    }
}

/// Plain sum of the values, rounded to one decimal.
pub fn total(inputs: &[ScoreInput]) -> f64 {
    round1(inputs.iter().map(|i| i.value).sum())
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
