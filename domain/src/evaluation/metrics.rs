//! Binary classification metrics (positive class = sarcastic)

use serde::{Deserialize, Serialize};

/// 2×2 confusion matrix, rows = gold, columns = predicted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_positive: usize,
}

impl ConfusionMatrix {
    /// Count label pairs. Pairs with a label other than 0/1 are skipped.
    pub fn from_labels(y_true: &[i32], y_pred: &[i32]) -> Self {
        let mut m = Self::default();
        for (t, p) in y_true.iter().zip(y_pred) {
            match (t, p) {
                (0, 0) => m.true_negative += 1,
                (0, 1) => m.false_positive += 1,
                (1, 0) => m.false_negative += 1,
                (1, 1) => m.true_positive += 1,
                _ => {}
            }
        }
        m
    }

    pub fn total(&self) -> usize {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    /// `[[tn, fp], [fn, tp]]`
    pub fn as_rows(&self) -> [[usize; 2]; 2] {
        [
            [self.true_negative, self.false_positive],
            [self.false_negative, self.true_positive],
        ]
    }

    fn positive_support(&self) -> usize {
        self.true_positive + self.false_negative
    }

    fn negative_support(&self) -> usize {
        self.true_negative + self.false_positive
    }

    fn class_present(&self, positive: bool) -> bool {
        if positive {
            self.positive_support() + self.false_positive > 0
        } else {
            self.negative_support() + self.false_negative > 0
        }
    }

    /// (precision, recall, f1) for one class
    fn class_scores(&self, positive: bool) -> (f64, f64, f64) {
        let (tp, fp, fn_) = if positive {
            (self.true_positive, self.false_positive, self.false_negative)
        } else {
            (self.true_negative, self.false_negative, self.false_positive)
        };
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        (precision, recall, f1)
    }
}

/// Scores over one evaluated batch. Zero divisions yield 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub micro_f1: f64,
    pub macro_f1: f64,
    pub weighted_f1: f64,
    /// Area under the ROC curve of the hard predictions; 0.0 when gold
    /// labels contain a single class.
    pub roc_auc: f64,
    pub confusion: ConfusionMatrix,
    pub evaluated: usize,
}

impl ClassificationMetrics {
    pub fn compute(y_true: &[i32], y_pred: &[i32]) -> Self {
        let confusion = ConfusionMatrix::from_labels(y_true, y_pred);
        let evaluated = confusion.total();

        let (precision, recall, f1) = confusion.class_scores(true);
        let (_, specificity, negative_f1) = confusion.class_scores(false);
        let accuracy = ratio(confusion.true_positive + confusion.true_negative, evaluated);

        let present: Vec<f64> = [(true, f1), (false, negative_f1)]
            .into_iter()
            .filter(|(positive, _)| confusion.class_present(*positive))
            .map(|(_, score)| score)
            .collect();
        let macro_f1 = if present.is_empty() {
            0.0
        } else {
            present.iter().sum::<f64>() / present.len() as f64
        };

        let weighted_f1 = if evaluated == 0 {
            0.0
        } else {
            (f1 * confusion.positive_support() as f64
                + negative_f1 * confusion.negative_support() as f64)
                / evaluated as f64
        };

        let roc_auc = if confusion.positive_support() == 0 || confusion.negative_support() == 0 {
            0.0
        } else {
            (recall + specificity) / 2.0
        };

        Self {
            precision,
            recall,
            accuracy,
            f1,
            // Single-label classification: micro-F1 equals accuracy.
            micro_f1: accuracy,
            macro_f1,
            weighted_f1,
            roc_auc,
            confusion,
            evaluated,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mixed_predictions() {
        let y_true = [1, 1, 1, 0, 0, 0];
        let y_pred = [1, 1, 0, 0, 0, 1];
        let m = ClassificationMetrics::compute(&y_true, &y_pred);

        assert_eq!(m.confusion.as_rows(), [[2, 1], [1, 2]]);
        assert!(approx(m.precision, 2.0 / 3.0));
        assert!(approx(m.recall, 2.0 / 3.0));
        assert!(approx(m.f1, 2.0 / 3.0));
        assert!(approx(m.accuracy, 4.0 / 6.0));
        assert!(approx(m.micro_f1, m.accuracy));
        assert!(approx(m.macro_f1, 2.0 / 3.0));
        assert!(approx(m.weighted_f1, 2.0 / 3.0));
        assert!(approx(m.roc_auc, 2.0 / 3.0));
    }

    #[test]
    fn test_zero_division_yields_zero() {
        let m = ClassificationMetrics::compute(&[0, 0], &[0, 0]);
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.recall, 0.0);
        assert_eq!(m.f1, 0.0);
        assert_eq!(m.accuracy, 1.0);
        assert_eq!(m.macro_f1, 1.0);
        assert_eq!(m.roc_auc, 0.0);

        let empty = ClassificationMetrics::compute(&[], &[]);
        assert_eq!(empty.evaluated, 0);
        assert_eq!(empty.accuracy, 0.0);
        assert_eq!(empty.weighted_f1, 0.0);
    }

    #[test]
    fn test_error_labels_are_skipped() {
        let m = ClassificationMetrics::compute(&[1, 0, 1], &[1, -1, 1]);
        assert_eq!(m.evaluated, 2);
        assert_eq!(m.accuracy, 1.0);
    }
}
