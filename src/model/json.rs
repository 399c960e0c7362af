use super::attributes::{AttributeStore, ColumnInfo, ModelValue, RowInfo};
use super::core::{BuildMode, ObjectiveSense, SparseModel};
use crate::algebra::FloatT;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Reading and writing of model snapshots in JSON format.
pub trait ModelJSONReadWrite: Sized {
    /// Write a snapshot of the model to a file.
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// Rebuild a model from a snapshot written by `save_to_file`.
    fn load_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// Plain data copy of a model.  Elements are stored as (row, column, value)
// triples and the element arena, hash index and linked lists are rebuilt
// on load.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonModelData<T: FloatT> {
    pub number_rows: usize,
    pub number_columns: usize,
    pub sense: ObjectiveSense,
    pub mode: BuildMode,
    pub rows: Vec<RowInfo<T>>,
    pub columns: Vec<ColumnInfo<T>>,
    pub strings: Vec<(String, Option<T>)>,
    pub elements: Vec<(usize, usize, ModelValue<T>)>,
    pub quadratic: Vec<(usize, usize, T)>,
}

impl<T> ModelJSONReadWrite for SparseModel<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut json_data = JsonModelData {
            number_rows: self.number_rows,
            number_columns: self.number_columns,
            sense: self.sense,
            mode: self.mode(),
            rows: self.attributes.rows.clone(),
            columns: self.attributes.columns.clone(),
            strings: self
                .strings
                .iter()
                .map(|(s, v)| (s.to_string(), v))
                .collect(),
            elements: self
                .elements
                .iter()
                .map(|(_, t)| (t.row, t.column, t.value))
                .collect(),
            quadratic: self
                .quadratic
                .iter()
                .map(|(_, t)| (t.row, t.column, t.value))
                .collect(),
        };

        // infinite bounds can't be serialized
        sanitize_bounds(&mut json_data);

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonModelData<T> = serde_json::from_str(&buffer)?;

        desanitize_bounds(&mut json_data);

        let mut model = SparseModel::with_capacity(
            json_data.number_rows,
            json_data.number_columns,
            json_data.elements.len(),
        );
        model.grow_rows(json_data.number_rows);
        model.grow_columns(json_data.number_columns);
        model.attributes = AttributeStore::from_parts(json_data.rows, json_data.columns);
        model.sense = json_data.sense;

        // re-enter strings in id order so that symbolic values keep their ids
        for (string, value) in &json_data.strings {
            match value {
                Some(v) => model.strings.associate(string, *v),
                None => model.strings.intern(string),
            };
        }
        for (row, column, value) in json_data.elements {
            model.grow_rows(row + 1);
            model.grow_columns(column + 1);
            model.elements.upsert(row, column, value);
        }
        for (i, j, value) in json_data.quadratic {
            model.grow_columns(i.max(j) + 1);
            model.quadratic.upsert(i, j, value);
        }
        model.restore_mode(json_data.mode);

        Ok(model)
    }
}

fn sanitize_value<T: FloatT>(value: &mut ModelValue<T>) {
    if let ModelValue::Number(v) = value {
        if *v == T::infinity() {
            *v = T::max_value();
        } else if *v == T::neg_infinity() {
            *v = T::min_value();
        }
    }
}

fn desanitize_value<T: FloatT>(value: &mut ModelValue<T>) {
    if let ModelValue::Number(v) = value {
        if *v == T::max_value() {
            *v = T::infinity();
        } else if *v == T::min_value() {
            *v = T::neg_infinity();
        }
    }
}

fn sanitize_bounds<T: FloatT>(data: &mut JsonModelData<T>) {
    for row in data.rows.iter_mut() {
        sanitize_value(&mut row.lower);
        sanitize_value(&mut row.upper);
    }
    for col in data.columns.iter_mut() {
        sanitize_value(&mut col.lower);
        sanitize_value(&mut col.upper);
    }
}

fn desanitize_bounds<T: FloatT>(data: &mut JsonModelData<T>) {
    for row in data.rows.iter_mut() {
        desanitize_value(&mut row.lower);
        desanitize_value(&mut row.upper);
    }
    for col in data.columns.iter_mut() {
        desanitize_value(&mut col.lower);
        desanitize_value(&mut col.upper);
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0, 1], &[1.0, 2.0], f64::NEG_INFINITY, 4.0, "c0");
    model.set_column_name(1, "y");
    model.set_column_bounds(0, f64::NEG_INFINITY, f64::INFINITY);

    let mut file = tempfile::tempfile().unwrap();
    model.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let model2 = SparseModel::<f64>::load_from_file(&mut file).unwrap();

    // checked first, since element lookups promote the mode
    assert_eq!(model2.mode(), BuildMode::Rows);
    assert_eq!(model2.mode(), model.mode());
    assert_eq!(model2.number_rows(), 1);
    assert_eq!(model2.get_element(0, 1), 2.0);
    assert_eq!(model2.row_lower(0), f64::NEG_INFINITY);
    assert_eq!(model2.column_lower(0), f64::NEG_INFINITY);
    assert_eq!(model2.column_upper(1), f64::INFINITY);
    assert_eq!(model2.column("y"), Some(1));
}
