use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

pub fn parse_cell(raw: &str) -> CellValue {
    let text = raw.trim();
    if text.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(n) = text.parse::<i64>() {
        return CellValue::Int(n);
    }
    // "inf"/"NaN" parse as f64 but have no JSON number form, keep them as text
    if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return CellValue::Float(f);
    }
    CellValue::Text(text.to_string())
}

/// Rows of one page's table, or the concatenation across all pages of a
/// section. Every row holds exactly one cell per column.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends another dataset's rows, unioning schemas in first-seen column
    /// order. Cells absent from either side are filled with `Missing`.
    pub fn append(&mut self, other: Dataset) {
        let positions: Vec<usize> = other
            .columns
            .into_iter()
            .map(|column| match self.columns.iter().position(|c| *c == column) {
                Some(i) => i,
                None => {
                    self.columns.push(column);
                    for row in &mut self.rows {
                        row.push(CellValue::Missing);
                    }
                    self.columns.len() - 1
                }
            })
            .collect();

        for row in other.rows {
            let mut merged = vec![CellValue::Missing; self.columns.len()];
            for (i, cell) in row.into_iter().enumerate() {
                merged[positions[i]] = cell;
            }
            self.rows.push(merged);
        }
    }
}

// Serialized as a top-level array of objects, keys in first-seen column order.
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowObject {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct RowObject<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_cell, CellValue, Dataset};

    #[test]
    fn parse_cell_infers_types() {
        assert_eq!(parse_cell("42"), CellValue::Int(42));
        assert_eq!(parse_cell("-3"), CellValue::Int(-3));
        assert_eq!(parse_cell("2.5"), CellValue::Float(2.5));
        assert_eq!(parse_cell("  Sonic 2  "), CellValue::Text("Sonic 2".to_string()));
        assert_eq!(parse_cell(""), CellValue::Missing);
        assert_eq!(parse_cell("   "), CellValue::Missing);
        assert_eq!(parse_cell("NaN"), CellValue::Text("NaN".to_string()));
    }

    #[test]
    fn short_rows_are_null_filled() {
        let dataset = Dataset::from_parts(
            vec!["Id".to_string(), "Title".to_string()],
            vec![vec![CellValue::Int(1)]],
        );
        let json = serde_json::to_string(&dataset).unwrap();

        assert_eq!(json, r#"[{"Id":1,"Title":null}]"#);
    }

    #[test]
    fn append_keeps_first_seen_column_order() {
        let mut dataset = Dataset::from_parts(
            vec!["Id".to_string(), "Title".to_string()],
            vec![vec![CellValue::Int(1), CellValue::Text("Out Run".to_string())]],
        );
        dataset.append(Dataset::from_parts(
            vec!["Id".to_string(), "Title".to_string()],
            vec![vec![CellValue::Int(2), CellValue::Text("R-Type".to_string())]],
        ));

        assert_eq!(dataset.columns(), ["Id", "Title"]);
        assert_eq!(dataset.row_count(), 2);
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(
            json,
            r#"[{"Id":1,"Title":"Out Run"},{"Id":2,"Title":"R-Type"}]"#
        );
    }

    #[test]
    fn append_unions_mismatched_schemas() {
        let mut dataset = Dataset::from_parts(
            vec!["Id".to_string(), "Title".to_string()],
            vec![vec![CellValue::Int(1), CellValue::Text("Out Run".to_string())]],
        );
        dataset.append(Dataset::from_parts(
            vec!["Title".to_string(), "Year".to_string()],
            vec![vec![CellValue::Text("R-Type".to_string()), CellValue::Int(1987)]],
        ));

        assert_eq!(dataset.columns(), ["Id", "Title", "Year"]);
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(
            json,
            r#"[{"Id":1,"Title":"Out Run","Year":null},{"Id":null,"Title":"R-Type","Year":1987}]"#
        );
    }

    #[test]
    fn column_order_is_first_seen_not_alphabetical() {
        let dataset = Dataset::from_parts(
            vec!["Title".to_string(), "Id".to_string()],
            vec![vec![CellValue::Text("Out Run".to_string()), CellValue::Int(1)]],
        );
        let json = serde_json::to_string(&dataset).unwrap();

        assert_eq!(json, r#"[{"Title":"Out Run","Id":1}]"#);
    }

    #[test]
    fn non_ascii_text_survives_serialization() {
        let dataset = Dataset::from_parts(
            vec!["Título".to_string()],
            vec![vec![CellValue::Text("Fútbol Argentino '96".to_string())]],
        );
        let json = serde_json::to_string(&dataset).unwrap();

        assert_eq!(json, r#"[{"Título":"Fútbol Argentino '96"}]"#);
    }
}
