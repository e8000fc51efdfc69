mod table;

pub use table::{Cell, KnownColumn, ResultTable, MATCHED_LABEL};

use crate::error::{ReportError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 读取Excel文件的第一个工作表，首行作为表头。
/// 文件句柄在表格物化进内存后立即释放。
pub fn load_table(path: &Path) -> Result<ResultTable> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| ReportError::ExcelRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReportError::NoWorksheet(path.display().to_string()))?
        .map_err(|e| ReportError::ExcelRead(e.to_string()))?;

    let mut rows_iter = range.rows();

    let columns = match rows_iter.next() {
        Some(header) => header.iter().map(header_text).collect(),
        None => Vec::new(),
    };

    let rows = rows_iter
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    Ok(ResultTable { columns, rows })
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        other => Cell::Text(other.to_string()),
    }
}
