//! Загрузка датасета из CSV

use csv::ReaderBuilder;
use ndarray::{s, Array2, ArrayView1, ArrayView2};
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// Загрузчик табличных датасетов
pub struct DataLoader;

impl DataLoader {
    /// Загружает датасет из CSV-файла с одной строкой заголовка
    ///
    /// Все поля числовые, последний столбец - метка класса.
    pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
        let file = File::open(path.as_ref())?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .map(|field| field.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<f64>, _>>()
                .map_err(|source| Error::ParseFloat {
                    // +2: строки нумеруются с единицы, первая - заголовок
                    line: i + 2,
                    source,
                })?;
            rows.push(row);
        }

        dataset_from_rows(rows)
    }
}

/// Собирает таблицу из вложенных строк с проверкой прямоугольности
pub fn dataset_from_rows(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    if rows.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let expected = rows[0].len();
    if expected < 2 {
        return Err(Error::TooFewColumns { ncols: expected });
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(Error::RaggedRow {
                row: i,
                expected,
                actual: row.len(),
            });
        }
    }

    let nrows = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((nrows, expected), flat).expect("rows are rectangular"))
}

/// Разделяет таблицу на признаки и метки
pub fn split_features_labels(dataset: &Array2<f64>) -> Result<(ArrayView2<f64>, ArrayView1<f64>)> {
    if dataset.ncols() < 2 {
        return Err(Error::TooFewColumns {
            ncols: dataset.ncols(),
        });
    }

    let label_col = dataset.ncols() - 1;
    Ok((dataset.slice(s![.., ..label_col]), dataset.column(label_col)))
}
