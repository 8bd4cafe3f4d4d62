use derive_more::Deref;
use serde::Serialize;
use strum_macros::Display;

use crate::cell::CellType;

/// A top confidence strictly above this counts as high confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: CellType,
    /// Percentage on a 0-100 scale. Not normalized across results.
    pub confidence: f32,
    pub description: String,
}

impl ClassificationResult {
    pub fn new(label: CellType, confidence: f32) -> Self {
        Self {
            label,
            confidence,
            description: label.summary().to_string(),
        }
    }

    /// Width of the progress bar in percent, clamped to the bar.
    pub fn bar_width(&self) -> f32 {
        self.confidence.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfidenceLevel {
    #[strum(serialize = "High Confidence")]
    High,
    #[strum(serialize = "Medium Confidence")]
    Medium,
}

/// Non-empty results, highest confidence first.
#[derive(Debug, Clone, PartialEq, Serialize, Deref)]
pub struct Ranking(Vec<ClassificationResult>);

impl Ranking {
    /// Sorts by descending confidence; equal confidences keep catalog order.
    pub fn from_results(mut results: Vec<ClassificationResult>) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        results.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.label.cmp(&b.label))
        });
        Some(Self(results))
    }

    pub fn top(&self) -> &ClassificationResult {
        &self.0[0]
    }

    pub fn is_high_confidence(&self) -> bool {
        self.top().confidence > HIGH_CONFIDENCE_THRESHOLD
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        if self.is_high_confidence() {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: CellType, confidence: f32) -> ClassificationResult {
        ClassificationResult::new(label, confidence)
    }

    #[test]
    fn empty_results_have_no_ranking() {
        assert!(Ranking::from_results(Vec::new()).is_none());
    }

    #[test]
    fn sorts_descending_by_confidence() {
        let ranking = Ranking::from_results(vec![
            result(CellType::Neutrophil, 12.0),
            result(CellType::Lymphocyte, 64.5),
            result(CellType::Monocyte, 3.0),
            result(CellType::Eosinophil, 20.0),
        ])
        .unwrap();

        let labels: Vec<CellType> = ranking.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                CellType::Lymphocyte,
                CellType::Eosinophil,
                CellType::Neutrophil,
                CellType::Monocyte
            ]
        );
        assert_eq!(ranking.top().label, CellType::Lymphocyte);
    }

    #[test]
    fn ties_fall_back_to_catalog_order() {
        let ranking = Ranking::from_results(vec![
            result(CellType::Eosinophil, 40.0),
            result(CellType::Monocyte, 40.0),
            result(CellType::Neutrophil, 40.0),
        ])
        .unwrap();

        let labels: Vec<CellType> = ranking.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![CellType::Neutrophil, CellType::Monocyte, CellType::Eosinophil]
        );
    }

    #[test]
    fn exactly_eighty_is_not_high_confidence() {
        let at = Ranking::from_results(vec![result(CellType::Neutrophil, 80.0)]).unwrap();
        assert!(!at.is_high_confidence());
        assert_eq!(at.confidence_level(), ConfidenceLevel::Medium);

        let above = Ranking::from_results(vec![result(CellType::Neutrophil, 80.01)]).unwrap();
        assert!(above.is_high_confidence());
        assert_eq!(above.confidence_level().to_string(), "High Confidence");
    }

    #[test]
    fn confidences_are_not_normalized() {
        let ranking = Ranking::from_results(vec![
            result(CellType::Neutrophil, 95.0),
            result(CellType::Lymphocyte, 12.0),
        ])
        .unwrap();
        let total: f32 = ranking.iter().map(|r| r.confidence).sum();
        assert_eq!(total, 107.0);
        assert_eq!(ranking.top().bar_width(), 95.0);
    }

    #[test]
    fn bar_width_stays_on_the_scale() {
        assert_eq!(result(CellType::Monocyte, 130.0).bar_width(), 100.0);
        assert_eq!(result(CellType::Monocyte, -1.0).bar_width(), 0.0);
    }

    #[test]
    fn description_comes_from_catalog() {
        let r = result(CellType::Eosinophil, 2.0);
        assert_eq!(r.description, CellType::Eosinophil.summary());
    }
}
