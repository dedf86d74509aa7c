//! Стратифицированная выборка train/test наборов

use ndarray::{s, Array2, Array3, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::types::{SampleSets, SamplerConfig};

/// Разделение датасета на пулы классов по метке в последнем столбце
///
/// Возвращает (пульсары: метка 1, не-пульсары: метка 0).
pub fn split_by_class(dataset: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let label_col = dataset.ncols() - 1;

    let pulsar_indices: Vec<usize> = (0..dataset.nrows())
        .filter(|&i| dataset[[i, label_col]] == 1.0)
        .collect();
    let non_pulsar_indices: Vec<usize> = (0..dataset.nrows())
        .filter(|&i| dataset[[i, label_col]] == 0.0)
        .collect();

    (
        dataset.select(Axis(0), &pulsar_indices),
        dataset.select(Axis(0), &non_pulsar_indices),
    )
}

/// Генератор стратифицированных train/test выборок
///
/// Держит собственный генератор случайных чисел, засеянный один раз при
/// создании. Позиция потока продвигается с каждым розыгрышем, поэтому
/// повторный вызов с теми же аргументами дает другой (но воспроизводимый
/// при той же последовательности вызовов) результат. Новая сессия с тем же
/// зерном - новый `PulsarSampler`.
pub struct PulsarSampler {
    config: SamplerConfig,
    rng: StdRng,
}

impl PulsarSampler {
    pub fn new(seed: u64) -> Self {
        Self::with_config(SamplerConfig {
            seed,
            ..SamplerConfig::default()
        })
    }

    pub fn with_config(config: SamplerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Создает `num_sets` независимых train/test выборок
    ///
    /// Размеры выборок по классам: целая часть train_size и test_size,
    /// умноженных на доли из конфигурации. Каждый розыгрыш - без
    /// возвращения внутри себя, но из полного пула класса, так что выборки
    /// разных повторений (и train против test) могут пересекаться.
    ///
    /// Либо возвращаются все четыре батча, либо ошибка до первого
    /// розыгрыша.
    pub fn sample_pulsars(
        &mut self,
        dataset: &Array2<f64>,
        train_size: usize,
        test_size: usize,
        num_sets: usize,
    ) -> Result<SampleSets> {
        if dataset.ncols() < 2 {
            return Err(Error::TooFewColumns {
                ncols: dataset.ncols(),
            });
        }

        let (pulsars, non_pulsars) = split_by_class(dataset);

        let train_pulsar_size = (train_size as f64 * self.config.train_pulsar_fraction) as usize;
        let train_non_pulsar_size =
            (train_size as f64 * self.config.train_non_pulsar_fraction) as usize;
        let test_pulsar_size = (test_size as f64 * self.config.test_pulsar_fraction) as usize;
        let test_non_pulsar_size =
            (test_size as f64 * self.config.test_non_pulsar_fraction) as usize;

        // Все четыре размера проверяются до первого розыгрыша
        check_draw(&pulsars, train_pulsar_size, 1)?;
        check_draw(&non_pulsars, train_non_pulsar_size, 0)?;
        check_draw(&pulsars, test_pulsar_size, 1)?;
        check_draw(&non_pulsars, test_non_pulsar_size, 0)?;

        let ncols = dataset.ncols();
        let mut train_pulsars = Array3::zeros((num_sets, train_pulsar_size, ncols));
        let mut train_non_pulsars = Array3::zeros((num_sets, train_non_pulsar_size, ncols));
        let mut test_pulsars = Array3::zeros((num_sets, test_pulsar_size, ncols));
        let mut test_non_pulsars = Array3::zeros((num_sets, test_non_pulsar_size, ncols));

        for i in 0..num_sets {
            let train_pulsar_set = draw_rows(&pulsars, train_pulsar_size, &mut self.rng);
            let train_non_pulsar_set = draw_rows(&non_pulsars, train_non_pulsar_size, &mut self.rng);
            let test_pulsar_set = draw_rows(&pulsars, test_pulsar_size, &mut self.rng);
            let test_non_pulsar_set = draw_rows(&non_pulsars, test_non_pulsar_size, &mut self.rng);

            train_pulsars.slice_mut(s![i, .., ..]).assign(&train_pulsar_set);
            train_non_pulsars
                .slice_mut(s![i, .., ..])
                .assign(&train_non_pulsar_set);
            test_pulsars.slice_mut(s![i, .., ..]).assign(&test_pulsar_set);
            test_non_pulsars
                .slice_mut(s![i, .., ..])
                .assign(&test_non_pulsar_set);
        }

        Ok(SampleSets {
            train_pulsars,
            train_non_pulsars,
            test_pulsars,
            test_non_pulsars,
        })
    }
}

impl Default for PulsarSampler {
    fn default() -> Self {
        Self::with_config(SamplerConfig::default())
    }
}

fn check_draw(pool: &Array2<f64>, requested: usize, label: u8) -> Result<()> {
    if requested == 0 {
        return Ok(());
    }
    if pool.nrows() == 0 {
        return Err(Error::EmptyPool { label });
    }
    if requested > pool.nrows() {
        return Err(Error::InsufficientPool {
            label,
            requested,
            available: pool.nrows(),
        });
    }
    Ok(())
}

/// Случайные строки пула без возвращения
fn draw_rows(pool: &Array2<f64>, size: usize, rng: &mut StdRng) -> Array2<f64> {
    let indices: Vec<usize> = (0..pool.nrows()).collect();
    let chosen: Vec<usize> = indices.choose_multiple(rng, size).copied().collect();
    pool.select(Axis(0), &chosen)
}
