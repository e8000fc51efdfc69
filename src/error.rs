use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("文件未找到: {0}")]
    FileNotFound(String),

    #[error("Excel读取错误: {0}")]
    ExcelRead(String),

    #[error("工作簿中没有工作表: {0}")]
    NoWorksheet(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
