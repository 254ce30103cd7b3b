use serde::{Deserialize, Serialize};

use crate::core::types::{Benchmark, ModelId};

/// Benchmark accuracies for one model, all on the 0-100 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkScores {
    pub ifeval: f64,
    pub mmlu: f64,
    pub mmlu_pro: f64,
    pub arc_easy: f64,
    pub arc_challenge: f64,
    pub hellaswag: f64,
}

impl BenchmarkScores {
    #[must_use]
    pub fn get(&self, benchmark: Benchmark) -> f64 {
        match benchmark {
            Benchmark::IfEval => self.ifeval,
            Benchmark::Mmlu => self.mmlu,
            Benchmark::MmluPro => self.mmlu_pro,
            Benchmark::ArcEasy => self.arc_easy,
            Benchmark::ArcChallenge => self.arc_challenge,
            Benchmark::Hellaswag => self.hellaswag,
        }
    }

    pub fn set(&mut self, benchmark: Benchmark, value: f64) {
        let slot = match benchmark {
            Benchmark::IfEval => &mut self.ifeval,
            Benchmark::Mmlu => &mut self.mmlu,
            Benchmark::MmluPro => &mut self.mmlu_pro,
            Benchmark::ArcEasy => &mut self.arc_easy,
            Benchmark::ArcChallenge => &mut self.arc_challenge,
            Benchmark::Hellaswag => &mut self.hellaswag,
        };
        *slot = value;
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, benchmark: Benchmark, value: f64) -> Self {
        self.set(benchmark, value);
        self
    }
}

/// One model's row in the benchmark catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub model: ModelId,
    pub scores: BenchmarkScores,
}

impl BenchmarkRecord {
    pub fn new(model: impl Into<String>, scores: BenchmarkScores) -> Self {
        Self {
            model: ModelId::new(model),
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_cover_every_benchmark() {
        let mut scores = BenchmarkScores::default();
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for (benchmark, value) in Benchmark::ALL.into_iter().zip(values) {
            scores.set(benchmark, value);
        }

        assert!((scores.ifeval - 1.0).abs() < f64::EPSILON);
        assert!((scores.mmlu_pro - 3.0).abs() < f64::EPSILON);
        assert!((scores.get(Benchmark::Hellaswag) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: BenchmarkRecord =
            serde_json::from_str(r#"{"model": "m", "scores": {"mmlu": 55.0}}"#).unwrap();
        assert_eq!(record.model.as_str(), "m");
        assert!((record.scores.mmlu - 55.0).abs() < f64::EPSILON);
        assert!(record.scores.hellaswag.abs() < f64::EPSILON);
    }
}
