//! Нормализация признаков

use ndarray::{s, Array1, Array2, Axis};
use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Min-max нормализация столбцов признаков в диапазон [lower, upper]
///
/// Последний столбец считается меткой класса и копируется без изменений.
/// Вырожденный столбец (max == min) целиком отображается в lower.
pub struct FeatureNormalizer {
    lower: f64,
    upper: f64,
    min: Option<Array1<f64>>,
    scale: Option<Array1<f64>>,
    n_columns: usize,
    is_fitted: bool,
}

impl FeatureNormalizer {
    /// Диапазон по умолчанию: [0, pi]
    pub fn new() -> Self {
        Self::with_range(0.0, PI)
    }

    pub fn with_range(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            min: None,
            scale: None,
            n_columns: 0,
            is_fitted: false,
        }
    }

    pub fn fit(&mut self, dataset: &Array2<f64>) -> Result<()> {
        if dataset.nrows() == 0 {
            return Err(Error::EmptyDataset);
        }
        if dataset.ncols() < 2 {
            return Err(Error::TooFewColumns {
                ncols: dataset.ncols(),
            });
        }

        let n_features = dataset.ncols() - 1;
        let features = dataset.slice(s![.., ..n_features]);

        let mut min = Array1::zeros(n_features);
        let mut scale = Array1::zeros(n_features);

        for (j, column) in features.axis_iter(Axis(1)).enumerate() {
            let col_min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let col_max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            min[j] = col_min;
            // Вырожденный столбец: нулевой масштаб, все значения уходят в lower
            scale[j] = if col_max > col_min {
                (self.upper - self.lower) / (col_max - col_min)
            } else {
                0.0
            };
        }

        self.min = Some(min);
        self.scale = Some(scale);
        self.n_columns = dataset.ncols();
        self.is_fitted = true;

        Ok(())
    }

    pub fn transform(&self, dataset: &Array2<f64>) -> Result<Array2<f64>> {
        if !self.is_fitted {
            return Err(Error::NotFitted);
        }
        if dataset.ncols() != self.n_columns {
            return Err(Error::DimensionMismatch {
                expected: self.n_columns,
                actual: dataset.ncols(),
            });
        }

        let min = self.min.as_ref().ok_or(Error::NotFitted)?;
        let scale = self.scale.as_ref().ok_or(Error::NotFitted)?;

        // Метка в последнем столбце остается как есть
        let mut normalized = dataset.clone();
        for (j, mut column) in normalized
            .slice_mut(s![.., ..self.n_columns - 1])
            .axis_iter_mut(Axis(1))
            .enumerate()
        {
            for val in column.iter_mut() {
                *val = self.lower + (*val - min[j]) * scale[j];
            }
        }

        Ok(normalized)
    }

    pub fn fit_transform(&mut self, dataset: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(dataset)?;
        self.transform(dataset)
    }
}

impl Default for FeatureNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_feature_range() {
        let dataset = array![
            [1.0, 10.0, 0.0],
            [2.0, 30.0, 1.0],
            [3.0, 20.0, 0.0],
        ];

        let mut normalizer = FeatureNormalizer::new();
        let normalized = normalizer.fit_transform(&dataset).unwrap();

        for j in 0..2 {
            let column = normalized.column(j);
            let col_min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let col_max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(col_min.abs() < EPS);
            assert!((col_max - PI).abs() < EPS);
        }
    }

    #[test]
    fn test_custom_range() {
        let dataset = array![[0.0, 0.0], [5.0, 1.0], [10.0, 1.0]];

        let mut normalizer = FeatureNormalizer::with_range(-1.0, 1.0);
        let normalized = normalizer.fit_transform(&dataset).unwrap();

        assert!((normalized[[0, 0]] + 1.0).abs() < EPS);
        assert!(normalized[[1, 0]].abs() < EPS);
        assert!((normalized[[2, 0]] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_labels_unchanged() {
        let dataset = array![
            [1.0, 10.0, 0.0],
            [2.0, 30.0, 1.0],
            [3.0, 20.0, 1.0],
        ];

        let mut normalizer = FeatureNormalizer::new();
        let normalized = normalizer.fit_transform(&dataset).unwrap();

        for i in 0..dataset.nrows() {
            assert_eq!(normalized[[i, 2]], dataset[[i, 2]]);
        }
    }

    #[test]
    fn test_constant_column_maps_to_lower() {
        let dataset = array![[5.0, 1.0, 0.0], [5.0, 2.0, 1.0], [5.0, 3.0, 1.0]];

        let mut normalizer = FeatureNormalizer::new();
        let normalized = normalizer.fit_transform(&dataset).unwrap();

        for i in 0..dataset.nrows() {
            assert!(normalized[[i, 0]].is_finite());
            assert!(normalized[[i, 0]].abs() < EPS);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let dataset = array![[1.0, 0.0], [3.0, 1.0]];
        let original = dataset.clone();

        let mut normalizer = FeatureNormalizer::new();
        normalizer.fit_transform(&dataset).unwrap();

        assert_eq!(dataset, original);
    }

    #[test]
    fn test_transform_requires_fit() {
        let dataset = array![[1.0, 0.0], [3.0, 1.0]];
        let normalizer = FeatureNormalizer::new();

        assert!(matches!(
            normalizer.transform(&dataset),
            Err(Error::NotFitted)
        ));
    }

    #[test]
    fn test_too_few_columns() {
        let dataset = array![[1.0], [3.0]];
        let mut normalizer = FeatureNormalizer::new();

        assert!(matches!(
            normalizer.fit(&dataset),
            Err(Error::TooFewColumns { ncols: 1 })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Array2::<f64>::zeros((0, 3));
        let mut normalizer = FeatureNormalizer::new();

        assert!(matches!(normalizer.fit(&dataset), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_width_mismatch() {
        let train = array![[1.0, 2.0, 0.0], [3.0, 4.0, 1.0]];
        let other = array![[1.0, 0.0], [3.0, 1.0]];

        let mut normalizer = FeatureNormalizer::new();
        normalizer.fit(&train).unwrap();

        assert!(matches!(
            normalizer.transform(&other),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }
}
