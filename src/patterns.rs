//! 院校名称模式分析：长度统计与中英文字符构成

use crate::loader::{KnownColumn, ResultTable};

/// 名称字符串的长度与文字构成统计，比例均为百分数
#[derive(Debug, Clone, PartialEq)]
pub struct NamePatternStats {
    pub mean_len: f64,
    pub min_len: usize,
    pub max_len: usize,
    pub ascii_pct: f64,
    pub cjk_pct: f64,
    pub mixed_pct: f64,
}

/// 是否含有ASCII英文字母（a-z / A-Z）
pub fn contains_ascii_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// 是否含有CJK统一表意文字（U+4E00–U+9FFF）
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// 对院校名称列做模式分析。列缺失或表为空时返回None（静默跳过）。
/// 缺失值按"nan"占位文本参与统计，与上游流水线一致。
pub fn analyze(table: &ResultTable) -> Option<NamePatternStats> {
    let idx = table.column_index(KnownColumn::InstitutionName)?;
    if table.rows.is_empty() {
        return None;
    }

    let texts: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            row.get(idx)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "nan".to_string())
        })
        .collect();

    let lengths: Vec<usize> = texts.iter().map(|t| t.chars().count()).collect();
    let total = texts.len();

    let ascii = texts.iter().filter(|t| contains_ascii_letter(t)).count();
    let cjk = texts.iter().filter(|t| contains_cjk(t)).count();
    let mixed = texts
        .iter()
        .filter(|t| contains_ascii_letter(t) && contains_cjk(t))
        .count();

    let pct = |count: usize| count as f64 / total as f64 * 100.0;

    Some(NamePatternStats {
        mean_len: lengths.iter().sum::<usize>() as f64 / total as f64,
        min_len: lengths.iter().copied().min().unwrap_or(0),
        max_len: lengths.iter().copied().max().unwrap_or(0),
        ascii_pct: pct(ascii),
        cjk_pct: pct(cjk),
        mixed_pct: pct(mixed),
    })
}

/// 打印名称模式分析结果；院校名称列缺失时不输出任何内容
pub fn print_name_patterns(table: &ResultTable) {
    let stats = match analyze(table) {
        Some(stats) => stats,
        None => return,
    };

    println!("=== 院校名称模式分析 ===");
    println!("名称长度统计:");
    println!("  平均长度: {:.1}", stats.mean_len);
    println!("  最短: {}", stats.min_len);
    println!("  最长: {}", stats.max_len);
    println!();
    println!("包含英文字符的比例: {:.1}%", stats.ascii_pct);
    println!("包含中文字符的比例: {:.1}%", stats.cjk_pct);
    println!("中英文混合的比例: {:.1}%", stats.mixed_pct);
    println!();
}
