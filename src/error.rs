use thiserror::Error;

/// 抓取过程中的领域错误，其余 I/O 与解析错误走 anyhow
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// 响应中带有 GraphQL 错误，只保留第一条
    #[error("GraphQL error: {message}")]
    GraphQl { message: String },
}
