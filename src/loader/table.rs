use std::fmt;

/// 匹配成功的状态标签，其余状态一律视为未匹配
pub const MATCHED_LABEL: &str = "匹配成功";

/// 单元格值。布尔、日期等其他Excel类型在读取时转成文本。
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// 数值强制转换：数字直接返回，文本尝试解析，失败与缺失一律视为None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            // 缺失值渲染为"nan"，与上游匹配流水线的输出一致
            Cell::Empty => write!(f, "nan"),
        }
    }
}

/// 报告关心的已知列。列缺失是一等状态，对应报告节静默跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownColumn {
    InstitutionName,
    MatchStatus,
    MatchConfidence,
    MatchLevel,
    MatchReason,
    MatchedInstitutionName,
}

impl KnownColumn {
    pub const ALL: [KnownColumn; 6] = [
        KnownColumn::InstitutionName,
        KnownColumn::MatchStatus,
        KnownColumn::MatchConfidence,
        KnownColumn::MatchLevel,
        KnownColumn::MatchReason,
        KnownColumn::MatchedInstitutionName,
    ];

    /// 源表中的列名（与上游匹配流水线约定一致，要求完全相同）
    pub fn header(&self) -> &'static str {
        match self {
            KnownColumn::InstitutionName => "院校名称",
            KnownColumn::MatchStatus => "匹配状态",
            KnownColumn::MatchConfidence => "匹配置信度",
            KnownColumn::MatchLevel => "匹配级别",
            KnownColumn::MatchReason => "匹配原因",
            KnownColumn::MatchedInstitutionName => "匹配院校名称",
        }
    }
}

/// 匹配结果表：首行表头之后的全部数据行，读入后不再修改
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, column: KnownColumn) -> Option<usize> {
        self.columns.iter().position(|c| c == column.header())
    }

    pub fn has_column(&self, column: KnownColumn) -> bool {
        self.column_index(column).is_some()
    }
}
