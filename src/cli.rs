use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// 抓取 LeetCode 题单并保存为本地 JSON
#[derive(Debug, Parser)]
#[command(
    name = "scrape_leetcode",
    version,
    about = "Fetch a LeetCode favorite list and save it as JSON",
    after_help = "Example: scrape_leetcode ajpcecv6 \"Blind 75\""
)]
pub struct Cli {
    /// Favorite list id, e.g. ajpcecv6
    pub list_id: String,

    /// Display name, also used for the output file name
    pub name: String,

    /// Directory for the output file [env: PROBLEM_DATA_DIR, default: data]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// GraphQL endpoint [env: LEETCODE_GRAPHQL_URL]
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the scraped problems after saving
    #[arg(long)]
    pub print: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors, overrides -v
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        }
    }
}
