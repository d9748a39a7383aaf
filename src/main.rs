use anyhow::Result;
use clap::Parser;
use leetcode_list_scraper::cli::Cli;
use leetcode_list_scraper::config::ScraperConfig;
use leetcode_list_scraper::problem::print_problem_set;
use leetcode_list_scraper::scraper::LeetCodeScraper;
use log::{debug, info, LevelFilter};

// ---------- 主函数 ----------
#[tokio::main]
async fn main() -> Result<()> {
    // 参数不全时 clap 打印用法并退出，不会发出请求
    let cli = Cli::parse();
    init_logger(cli.log_level());

    let config = ScraperConfig::from_env().with_overrides(cli.endpoint.clone(), cli.output_dir.clone());
    debug!("配置: {:?}", config);

    let scraper = LeetCodeScraper::new(config);
    let report = scraper.scrape(&cli.list_id, &cli.name).await?;

    if cli.print {
        print_problem_set(&report.problem_set);
    }

    println!(
        "Successfully scraped {} problems and saved to {}",
        report.problem_count(),
        report.output_path.display()
    );
    Ok(())
}

/// 初始化 env_logger 配置
fn init_logger(level: LevelFilter) {
    use env_logger::{Builder, Target};

    Builder::new()
        .filter_level(level)
        .format_module_path(true)
        .format_level(true)
        .target(Target::Stdout)
        // 允许通过 RUST_LOG 环境变量覆盖配置
        .parse_env("RUST_LOG")
        .init();

    info!("logger initialized ({} level)", level);
}
