//! Immutable Row Table

use crate::cell::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Tabular data with named columns, one row per record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create a table from a header row and data rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with exactly this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Whether a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrow a single column by name
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        let index = self.column_index(name)?;
        Some(Column {
            name: &self.headers[index],
            index,
            rows: &self.rows,
        })
    }

    /// Cell at a row for a named column
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        if row >= self.rows.len() {
            return None;
        }
        self.column(name).map(|column| column.get(row))
    }
}

/// Read-only view over one column of a [`Table`]
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    name: &'a str,
    index: usize,
    rows: &'a [Vec<CellValue>],
}

impl<'a> Column<'a> {
    /// Column name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at a row; rows shorter than the header read as empty
    pub fn get(&self, row: usize) -> &'a CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(self.index))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Cells in row order
    pub fn iter(&self) -> impl Iterator<Item = &'a CellValue> + 'a {
        let index = self.index;
        self.rows
            .iter()
            .map(move |cells| cells.get(index).unwrap_or(&EMPTY_CELL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["SITE NUMBER".into(), "SITE STATUS".into(), "SITE STATUS".into()],
            vec![
                vec![CellValue::Integer(100), CellValue::Text("Selected".into()), CellValue::Empty],
                vec![CellValue::Integer(200)],
            ],
        )
    }

    #[test]
    fn test_column_lookup_uses_first_match() {
        let table = sample();
        assert_eq!(table.column_index("SITE STATUS"), Some(1));
        assert!(table.has_column("SITE NUMBER"));
        assert!(!table.has_column("site number"));
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let table = sample();
        let status = table.column("SITE STATUS").unwrap();
        let cells: Vec<_> = status.iter().cloned().collect();
        assert_eq!(cells, vec![CellValue::Text("Selected".into()), CellValue::Empty]);
        assert_eq!(status.get(5), &CellValue::Empty);
    }

    #[test]
    fn test_cell_out_of_range() {
        let table = sample();
        assert_eq!(table.cell(0, "SITE NUMBER"), Some(&CellValue::Integer(100)));
        assert_eq!(table.cell(2, "SITE NUMBER"), None);
        assert_eq!(table.cell(0, "MISSING"), None);
    }
}
