use crate::error::DatasetError;
use serde::{Deserialize, Serialize};

/// Raw values of a single column. `None` marks a missing value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(values) => values.len(),
            ColumnValues::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Column {
            name: name.into(),
            values: ColumnValues::Text(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }

    /// Non-missing finite values of a numeric column. Returns `None` for text
    /// columns.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match &self.values {
            ColumnValues::Numeric(values) => Some(
                values
                    .iter()
                    .filter_map(|v| v.filter(|x| x.is_finite()))
                    .collect(),
            ),
            ColumnValues::Text(_) => None,
        }
    }

    /// Non-missing values rendered as category labels. Numeric categories
    /// (small ordinal codes, binary flags) are formatted with their natural
    /// display form, so `1.0` becomes `"1"`.
    pub fn category_labels(&self) -> Vec<String> {
        match &self.values {
            ColumnValues::Numeric(values) => values
                .iter()
                .filter_map(|v| v.filter(|x| x.is_finite()))
                .map(|v| v.to_string())
                .collect(),
            ColumnValues::Text(values) => values.iter().flatten().cloned().collect(),
        }
    }
}

/// An ordered collection of named, equal-length columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(DatasetError::ColumnLengthMismatch {
                        name: column.name.clone(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(DatasetError::DuplicateColumnName(column.name.clone()));
            }
        }

        Ok(Dataset { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.num_rows() == 0
    }
}

impl TryFrom<Vec<Column>> for Dataset {
    type Error = DatasetError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        Dataset::new(columns)
    }
}

impl From<Dataset> for Vec<Column> {
    fn from(dataset: Dataset) -> Self {
        dataset.columns
    }
}
