use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use reqwest::header::{REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::graphql::{FavoriteListData, FavoriteQuestionList, GraphQLRequest, GraphQLResponse};
use crate::problem::{output_file_name, ProblemSet};

// ---------- 常量定义 ----------
// 不带浏览器头会被 Cloudflare 拦截
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";
pub const LEETCODE_REFERER: &str = "https://leetcode.com";

/// 一次抓取的结果摘要
#[derive(Debug)]
pub struct ScrapeReport {
    pub problem_set: ProblemSet,
    /// 题单总题数（可能大于本页题数）
    pub total_length: u32,
    pub has_more: bool,
    pub output_path: PathBuf,
}

impl ScrapeReport {
    pub fn problem_count(&self) -> usize {
        self.problem_set.len()
    }
}

pub struct LeetCodeScraper {
    client: Client,
    config: ScraperConfig,
}

impl LeetCodeScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    // ---------- 核心逻辑 ----------
    /// 拉取题单第一页，GraphQL 错误直接返回
    pub async fn fetch_favorite_list(&self, list_id: &str) -> Result<FavoriteQuestionList> {
        trace!("准备 GraphQL 请求: list_id={}", list_id);
        let request_body = GraphQLRequest::favorite_question_list(list_id);

        trace!("发送 GraphQL 请求: url={}", self.config.graphql_url);
        let resp = self
            .client
            .post(&self.config.graphql_url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, LEETCODE_REFERER)
            .json(&request_body)
            .send()
            .await
            .context("Error making request")?;

        let status = resp.status();
        trace!("收到API响应: status={}", status);
        let body = resp.text().await.context("Error reading response")?;

        // 非 200 只打印诊断信息，仍尝试解析
        if status != StatusCode::OK {
            warn!("Response Status: {}", status.as_u16());
            warn!("Response Body: {}", body);
        }

        trace!("解析JSON响应体");
        let api_response: GraphQLResponse<FavoriteListData> =
            serde_json::from_str(&body).context("Error parsing response")?;

        if let Some(message) = api_response.first_error() {
            return Err(ScrapeError::GraphQl {
                message: message.to_string(),
            }
            .into());
        }

        // 没有错误也没有题单时按空题单处理
        let list = match api_response.data.and_then(|data| data.favorite_question_list) {
            Some(list) => list,
            None => {
                warn!("response contained no favoriteQuestionList for list {}", list_id);
                FavoriteQuestionList::default()
            }
        };

        debug!(
            "获取到题单: questions={}, total_length={}, has_more={}",
            list.questions.len(),
            list.total_length,
            list.has_more
        );
        Ok(list)
    }

    /// 拉取、转换并写入 `<output_dir>/<name>-problems.json`
    pub async fn scrape(&self, list_id: &str, name: &str) -> Result<ScrapeReport> {
        info!("Fetching list: {}", list_id);
        let list = self.fetch_favorite_list(list_id).await?;

        if list.has_more {
            warn!(
                "list {} has {} problems, only the first {} were stored",
                list_id,
                list.total_length,
                list.questions.len()
            );
        }

        let problem_set =
            ProblemSet::from_questions(name, &list.questions, &self.config.problem_url_base);

        let output_path = save_problem_set(&problem_set, &self.config.output_dir).await?;

        Ok(ScrapeReport {
            problem_set,
            total_length: list.total_length,
            has_more: list.has_more,
            output_path,
        })
    }
}

/// 确保目录存在后写入 JSON，已存在的文件会被覆盖
pub async fn save_problem_set(problem_set: &ProblemSet, dir: &Path) -> Result<PathBuf> {
    trace!("创建输出目录: {}", dir.display());
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Error creating directory {}", dir.display()))?;

    // 名称以 / 开头时 join 会丢掉 dir，文件必须落在输出目录内
    let file_name = output_file_name(&problem_set.name);
    let output_path = dir.join(file_name.trim_start_matches(['/', '\\']));
    let json_data = problem_set
        .to_pretty_json()
        .context("Error marshaling output")?;

    trace!("写入文件: {}", output_path.display());
    let mut file = File::create(&output_path)
        .await
        .with_context(|| format!("Error writing file {}", output_path.display()))?;
    file.write_all(json_data.as_bytes())
        .await
        .with_context(|| format!("Error writing file {}", output_path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Error writing file {}", output_path.display()))?;

    info!(
        "saved {} problems to {}",
        problem_set.len(),
        output_path.display()
    );
    Ok(output_path)
}
