use clap::Parser;
use match_report_rust::{cli, loader, patterns, report};
use cli::Cli;
use report::ReportOptions;

fn main() {
    let cli = Cli::parse();

    println!("开始分析院校匹配结果...");
    println!("{}", "=".repeat(50));

    // 读取失败只打印消息，不向上传播；后续分析依赖表格，随之跳过
    let table = match loader::load_table(&cli.file) {
        Ok(table) => Some(table),
        Err(e) => {
            println!("读取文件失败: {}", e);
            None
        }
    };

    if let Some(table) = table {
        let opts = ReportOptions {
            threshold: cli.threshold,
            unmatched_samples: cli.unmatched_samples,
            low_samples: cli.low_samples,
        };

        report::print_report(&table, &opts);
        patterns::print_name_patterns(&table);

        println!("=== 分析完成 ===");
        println!("详细数据已输出，请查看上述统计信息");
    }
}
