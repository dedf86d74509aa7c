/// Типы данных для подготовки датасета

use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Политика стратифицированной выборки
///
/// Доли классов фиксированы как политика, а не выведены из датасета:
/// обучающая выборка сбалансирована (0.5/0.5), тестовая намеренно
/// повторяет известный дисбаланс классов (0.092/0.908).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_train_pulsar_fraction")]
    pub train_pulsar_fraction: f64,
    #[serde(default = "default_train_non_pulsar_fraction")]
    pub train_non_pulsar_fraction: f64,
    #[serde(default = "default_test_pulsar_fraction")]
    pub test_pulsar_fraction: f64,
    #[serde(default = "default_test_non_pulsar_fraction")]
    pub test_non_pulsar_fraction: f64,
}

fn default_seed() -> u64 { 70 }
fn default_train_pulsar_fraction() -> f64 { 0.5 }
fn default_train_non_pulsar_fraction() -> f64 { 0.5 }
fn default_test_pulsar_fraction() -> f64 { 0.092 }
fn default_test_non_pulsar_fraction() -> f64 { 0.908 }

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            train_pulsar_fraction: default_train_pulsar_fraction(),
            train_non_pulsar_fraction: default_train_non_pulsar_fraction(),
            test_pulsar_fraction: default_test_pulsar_fraction(),
            test_non_pulsar_fraction: default_test_non_pulsar_fraction(),
        }
    }
}

/// Четыре батча выборок, каждый формы [num_sets, sample_size, num_columns]
///
/// i-й срез каждого батча отвечает i-му повторению. Выборки берутся из
/// полного пула класса при каждом повторении, поэтому одна строка может
/// встретиться и в train, и в test, и в разных повторениях.
#[derive(Debug, Clone)]
pub struct SampleSets {
    pub train_pulsars: Array3<f64>,
    pub train_non_pulsars: Array3<f64>,
    pub test_pulsars: Array3<f64>,
    pub test_non_pulsars: Array3<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub dataset: Vec<Vec<f64>>,
    #[serde(default)]
    pub lower: f64,
    #[serde(default = "default_upper")]
    pub upper: f64,
}

fn default_upper() -> f64 { PI }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub dataset: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRequest {
    pub dataset: Vec<Vec<f64>>,
    pub train_size: usize,
    pub test_size: usize,
    pub num_sets: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResponse {
    pub train_pulsars: Vec<Vec<Vec<f64>>>,
    pub train_non_pulsars: Vec<Vec<Vec<f64>>>,
    pub test_pulsars: Vec<Vec<Vec<f64>>>,
    pub test_non_pulsars: Vec<Vec<Vec<f64>>>,
}

impl From<SampleSets> for SampleResponse {
    fn from(sets: SampleSets) -> Self {
        Self {
            train_pulsars: batch_to_nested(&sets.train_pulsars),
            train_non_pulsars: batch_to_nested(&sets.train_non_pulsars),
            test_pulsars: batch_to_nested(&sets.test_pulsars),
            test_non_pulsars: batch_to_nested(&sets.test_non_pulsars),
        }
    }
}

fn batch_to_nested(batch: &Array3<f64>) -> Vec<Vec<Vec<f64>>> {
    batch
        .outer_iter()
        .map(|sample| sample.outer_iter().map(|row| row.to_vec()).collect())
        .collect()
}
