/// Модуль предобработки данных

pub mod normalization;

pub use normalization::FeatureNormalizer;
