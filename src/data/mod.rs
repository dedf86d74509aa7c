/// Модуль загрузки данных

pub mod loader;

pub use loader::{dataset_from_rows, split_features_labels, DataLoader};
