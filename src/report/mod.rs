mod stats;

pub use stats::{summarize, NumericSummary};

use crate::loader::{Cell, KnownColumn, ResultTable, MATCHED_LABEL};
use std::collections::BTreeMap;

/// 报告参数（阈值与样本条数来自命令行）
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub threshold: f64,
    pub unmatched_samples: usize,
    pub low_samples: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            unmatched_samples: 10,
            low_samples: 5,
        }
    }
}

fn is_matched(cell: Option<&Cell>) -> bool {
    cell.and_then(Cell::as_text) == Some(MATCHED_LABEL)
}

/// 状态分布：每个取值的出现次数，按次数降序、同次数按取值排序保证输出稳定。
/// 各取值次数之和等于总行数。
pub fn status_counts(table: &ResultTable) -> Option<Vec<(String, usize)>> {
    let idx = table.column_index(KnownColumn::MatchStatus)?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        let value = row.get(idx).map(|c| c.to_string()).unwrap_or_default();
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Some(pairs)
}

/// 匹配成功率（百分比）。空表不计算，避免除零。
pub fn success_rate(table: &ResultTable) -> Option<f64> {
    let idx = table.column_index(KnownColumn::MatchStatus)?;
    if table.rows.is_empty() {
        return None;
    }

    let matched = table
        .rows
        .iter()
        .filter(|row| is_matched(row.get(idx)))
        .count();
    Some(matched as f64 / table.rows.len() as f64 * 100.0)
}

/// 匹配级别分布，按级别取值升序（与上游报表一致）
pub fn level_counts(table: &ResultTable) -> Option<Vec<(String, usize)>> {
    let idx = table.column_index(KnownColumn::MatchLevel)?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        let value = row.get(idx).map(|c| c.to_string()).unwrap_or_default();
        *counts.entry(value).or_insert(0) += 1;
    }
    Some(counts.into_iter().collect())
}

/// 状态不是"匹配成功"的所有行（即成功集合的补集）
pub fn unmatched_rows(table: &ResultTable) -> Option<Vec<&Vec<Cell>>> {
    let idx = table.column_index(KnownColumn::MatchStatus)?;
    Some(
        table
            .rows
            .iter()
            .filter(|row| !is_matched(row.get(idx)))
            .collect(),
    )
}

/// 置信度数值强制转换后有效的值；非数值与缺失不计入
pub fn confidence_values(table: &ResultTable) -> Option<Vec<f64>> {
    let idx = table.column_index(KnownColumn::MatchConfidence)?;
    Some(
        table
            .rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(Cell::as_f64))
            .collect(),
    )
}

/// 置信度低于阈值的行；置信度缺失或无法解析的行不算低置信度
pub fn low_confidence_rows(table: &ResultTable, threshold: f64) -> Option<Vec<&Vec<Cell>>> {
    let idx = table.column_index(KnownColumn::MatchConfidence)?;
    Some(
        table
            .rows
            .iter()
            .filter(|row| {
                row.get(idx)
                    .and_then(Cell::as_f64)
                    .map(|v| v < threshold)
                    .unwrap_or(false)
            })
            .collect(),
    )
}

/// 打印完整诊断报告（基本信息、前5行、各分布、案例样本）
pub fn print_report(table: &ResultTable, opts: &ReportOptions) {
    println!("=== 文件基本信息 ===");
    println!("总行数: {}", table.row_count());
    println!("总列数: {}", table.column_count());
    println!("列名: {:?}", table.columns);
    println!();

    println!("=== 前5行数据 ===");
    print_head(table, 5);
    println!();

    if let Some(counts) = status_counts(table) {
        println!("=== 匹配状态分布 ===");
        for (value, count) in &counts {
            println!("{}    {}", value, count);
        }
        if let Some(rate) = success_rate(table) {
            println!("匹配成功率: {:.1}%", rate);
        }
        println!();
    }

    if let Some(values) = confidence_values(table) {
        println!("=== 置信度分布 ===");
        print_summary(&values);
        println!();
    }

    if let Some(counts) = level_counts(table) {
        println!("=== 匹配级别分布 ===");
        for (value, count) in &counts {
            println!("{}    {}", value, count);
        }
        println!();
    }

    if let Some(unmatched) = unmatched_rows(table) {
        println!("=== 未匹配案例样本 ===");
        if !unmatched.is_empty() {
            println!("未匹配数量: {}", unmatched.len());
            print_samples(table, &unmatched, "未匹配案例", opts.unmatched_samples);
        }
        println!();
    }

    if let Some(low) = low_confidence_rows(table, opts.threshold) {
        println!("=== 低置信度案例样本 (置信度<{}) ===", opts.threshold);
        if !low.is_empty() {
            println!("低置信度数量: {}", low.len());
            print_samples(table, &low, "低置信度案例", opts.low_samples);
        }
        println!();
    }
}

fn print_head(table: &ResultTable, limit: usize) {
    println!("{}", table.columns.join(" | "));
    for row in table.rows.iter().take(limit) {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", line.join(" | "));
    }
}

fn print_summary(values: &[f64]) {
    match summarize(values) {
        Some(s) => {
            println!("count    {}", s.count);
            println!("mean     {:.4}", s.mean);
            println!("std      {:.4}", s.std);
            println!("min      {:.4}", s.min);
            println!("25%      {:.4}", s.q25);
            println!("50%      {:.4}", s.median);
            println!("75%      {:.4}", s.q75);
            println!("max      {:.4}", s.max);
        }
        None => println!("count    0"),
    }
}

/// 逐条打印样本行，只输出表中存在的已知列，顺序与表头一致
fn print_samples(table: &ResultTable, rows: &[&Vec<Cell>], label: &str, limit: usize) {
    for (i, row) in rows.iter().take(limit).enumerate() {
        println!();
        println!("{} {}:", label, i + 1);
        for (col_idx, name) in table.columns.iter().enumerate() {
            if KnownColumn::ALL.iter().any(|k| k.header() == name) {
                let value = row
                    .get(col_idx)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "nan".to_string());
                println!("  {}: {}", name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn status_table() -> ResultTable {
        ResultTable {
            columns: vec!["院校名称".to_string(), "匹配状态".to_string()],
            rows: vec![
                vec![text("Bath University"), text("匹配成功")],
                vec![text("某学院"), text("未匹配")],
                vec![text("ABC学院"), text("未匹配")],
            ],
        }
    }

    #[test]
    fn test_status_counts_sum_to_row_count() {
        let table = status_table();
        let counts = status_counts(&table).unwrap();
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, table.row_count());
    }

    #[test]
    fn test_status_counts_values() {
        let counts = status_counts(&status_table()).unwrap();
        assert_eq!(counts[0], ("未匹配".to_string(), 2));
        assert_eq!(counts[1], ("匹配成功".to_string(), 1));
    }

    #[test]
    fn test_success_rate() {
        let rate = success_rate(&status_table()).unwrap();
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.1}", rate), "33.3");
    }

    #[test]
    fn test_success_rate_empty_table_not_computed() {
        let table = ResultTable {
            columns: vec!["匹配状态".to_string()],
            rows: vec![],
        };
        assert!(success_rate(&table).is_none());
    }

    #[test]
    fn test_success_rate_without_status_column() {
        let table = ResultTable {
            columns: vec!["院校名称".to_string()],
            rows: vec![vec![text("某学院")]],
        };
        assert!(success_rate(&table).is_none());
    }

    #[test]
    fn test_unmatched_is_complement_of_matched() {
        let table = status_table();
        let unmatched = unmatched_rows(&table).unwrap();
        assert_eq!(unmatched.len(), 2);
        assert_eq!(unmatched[0][0], text("某学院"));
        assert_eq!(unmatched[1][0], text("ABC学院"));
    }

    #[test]
    fn test_missing_status_counts_as_unmatched() {
        let table = ResultTable {
            columns: vec!["匹配状态".to_string()],
            rows: vec![vec![Cell::Empty], vec![text("匹配成功")]],
        };
        let unmatched = unmatched_rows(&table).unwrap();
        assert_eq!(unmatched.len(), 1);
    }

    #[test]
    fn test_low_confidence_excludes_non_numeric() {
        let table = ResultTable {
            columns: vec!["匹配置信度".to_string()],
            rows: vec![
                vec![Cell::Number(0.95)],
                vec![Cell::Number(0.5)],
                vec![text("n/a")],
                vec![text("0.79")],
            ],
        };
        let low = low_confidence_rows(&table, 0.8).unwrap();
        assert_eq!(low.len(), 2);
        assert_eq!(low[0][0], Cell::Number(0.5));
        assert_eq!(low[1][0], text("0.79"));
    }

    #[test]
    fn test_threshold_is_strict() {
        let table = ResultTable {
            columns: vec!["匹配置信度".to_string()],
            rows: vec![vec![Cell::Number(0.8)], vec![Cell::Number(0.7999)]],
        };
        let low = low_confidence_rows(&table, 0.8).unwrap();
        assert_eq!(low.len(), 1);
    }

    #[test]
    fn test_confidence_values_coercion() {
        let table = ResultTable {
            columns: vec!["匹配置信度".to_string()],
            rows: vec![
                vec![Cell::Number(1.0)],
                vec![text("0.5")],
                vec![text("n/a")],
                vec![Cell::Empty],
            ],
        };
        let values = confidence_values(&table).unwrap();
        assert_eq!(values, vec![1.0, 0.5]);
    }

    #[test]
    fn test_level_counts_sorted_ascending() {
        let table = ResultTable {
            columns: vec!["匹配级别".to_string()],
            rows: vec![
                vec![Cell::Number(2.0)],
                vec![Cell::Number(1.0)],
                vec![Cell::Number(2.0)],
            ],
        };
        let counts = level_counts(&table).unwrap();
        assert_eq!(counts, vec![("1".to_string(), 1), ("2".to_string(), 2)]);
    }

    #[test]
    fn test_sections_absent_without_columns() {
        let table = ResultTable {
            columns: vec!["其他列".to_string()],
            rows: vec![vec![text("x")]],
        };
        assert!(status_counts(&table).is_none());
        assert!(level_counts(&table).is_none());
        assert!(unmatched_rows(&table).is_none());
        assert!(confidence_values(&table).is_none());
        assert!(low_confidence_rows(&table, 0.8).is_none());
    }
}
