/// Модуль стратифицированной выборки

pub mod stratified;

pub use stratified::{split_by_class, PulsarSampler};
