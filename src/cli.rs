use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "match-report")]
#[command(about = "院校匹配结果诊断报告工具", long_about = None)]
pub struct Cli {
    /// 匹配结果Excel文件路径（第一个工作表，首行为表头）
    #[arg(required = true)]
    pub file: PathBuf,

    /// 低置信度阈值
    #[arg(short, long, default_value = "0.8")]
    pub threshold: f64,

    /// 未匹配案例最多打印条数
    #[arg(long, default_value = "10")]
    pub unmatched_samples: usize,

    /// 低置信度案例最多打印条数
    #[arg(long, default_value = "5")]
    pub low_samples: usize,
}
