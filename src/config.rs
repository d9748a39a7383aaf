use std::env;
use std::path::PathBuf;

pub const DEFAULT_GRAPHQL_URL: &str = "https://leetcode.com/graphql";
pub const DEFAULT_PROBLEM_URL: &str = "https://leetcode.com/problems";
pub const DEFAULT_DATA_DIR: &str = "data";

pub const ENV_GRAPHQL_URL: &str = "LEETCODE_GRAPHQL_URL";
pub const ENV_PROBLEM_URL: &str = "LEETCODE_PROBLEM_URL";
pub const ENV_DATA_DIR: &str = "PROBLEM_DATA_DIR";

/// 抓取配置：接口地址、题目链接前缀、输出目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub graphql_url: String,
    pub problem_url_base: String,
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.into(),
            problem_url_base: DEFAULT_PROBLEM_URL.into(),
            output_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl ScraperConfig {
    /// 从环境变量读取（先加载 .env），未设置时使用默认值
    pub fn from_env() -> Self {
        dotenv::dotenv().ok(); // 加载.env文件
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            graphql_url: value(ENV_GRAPHQL_URL, DEFAULT_GRAPHQL_URL),
            problem_url_base: value(ENV_PROBLEM_URL, DEFAULT_PROBLEM_URL),
            output_dir: PathBuf::from(value(ENV_DATA_DIR, DEFAULT_DATA_DIR)),
        }
    }

    /// 命令行参数优先于环境变量
    pub fn with_overrides(mut self, endpoint: Option<String>, output_dir: Option<PathBuf>) -> Self {
        if let Some(endpoint) = endpoint {
            self.graphql_url = endpoint;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }
}
