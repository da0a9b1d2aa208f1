use scraper::{ElementRef, Html, Selector};

use crate::domain::table::{parse_cell, CellValue, Dataset};

/// Returns the first table in the document as a dataset, or `None` when the
/// page has no parseable table. Pagination uses `None` as its end signal.
pub fn extract_first_table(html: &str) -> Option<Dataset> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let header_selector = Selector::parse("th").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document.select(&table_selector).next()?;

    let mut columns: Vec<String> = vec![];
    let mut rows: Vec<Vec<CellValue>> = vec![];

    for row in table.select(&row_selector) {
        if columns.is_empty() {
            let headers: Vec<String> = row
                .select(&header_selector)
                .map(|cell| cell_text(cell).trim().to_string())
                .collect();
            if !headers.is_empty() {
                columns = headers;
                continue;
            }
        }

        let cells: Vec<CellValue> = row
            .select(&cell_selector)
            .map(|cell| parse_cell(&cell_text(cell)))
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    // Headerless tables get positional column names
    if columns.is_empty() {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        columns = (0..width).map(|i| i.to_string()).collect();
    }

    Some(Dataset::from_parts(columns, rows))
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>()
}
