//! LeetCode GraphQL 请求与响应结构

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

pub const OPERATION_NAME: &str = "favoriteQuestionList";

/// 单次请求的题目上限，只取第一页
pub const PAGE_LIMIT: u32 = 100;

/// 与浏览器 Network 面板中一致的查询
pub const FAVORITE_QUESTION_LIST_QUERY: &str = r#"
    query favoriteQuestionList($favoriteSlug: String!, $filter: FavoriteQuestionFilterInput, $filtersV2: QuestionFilterInput, $searchKeyword: String, $sortBy: QuestionSortByInput, $limit: Int, $skip: Int, $version: String = "v2") {
      favoriteQuestionList(
        favoriteSlug: $favoriteSlug
        filter: $filter
        filtersV2: $filtersV2
        searchKeyword: $searchKeyword
        sortBy: $sortBy
        limit: $limit
        skip: $skip
        version: $version
      ) {
        questions {
          difficulty
          questionFrontendId
          title
          titleSlug
        }
        totalLength
        hasMore
      }
    }
    "#;

// ---------- 请求 ----------
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Value,
    pub operation_name: String,
}

impl GraphQLRequest {
    /// 构造 favoriteQuestionList 请求，所有筛选条件为空
    pub fn favorite_question_list(list_id: &str) -> Self {
        Self {
            query: FAVORITE_QUESTION_LIST_QUERY.to_string(),
            variables: favorite_list_variables(list_id, 0, PAGE_LIMIT),
            operation_name: OPERATION_NAME.to_string(),
        }
    }
}

/// 默认变量：空筛选（operator 为 IS）、自定义顺序升序
pub fn favorite_list_variables(list_id: &str, skip: u32, limit: u32) -> Value {
    json!({
        "skip": skip,
        "limit": limit,
        "favoriteSlug": list_id,
        "filtersV2": {
            "filterCombineType": "ALL",
            "statusFilter": { "questionStatuses": [], "operator": "IS" },
            "difficultyFilter": { "difficulties": [], "operator": "IS" },
            "languageFilter": { "languageSlugs": [], "operator": "IS" },
            "topicFilter": { "topicSlugs": [], "operator": "IS" },
            "acceptanceFilter": {},
            "frequencyFilter": {},
            "lastSubmittedFilter": {},
            "publishedFilter": {},
            "companyFilter": { "companySlugs": [], "operator": "IS" },
            "positionFilter": { "positionSlugs": [], "operator": "IS" },
            "premiumFilter": { "premiumStatus": [], "operator": "IS" }
        },
        "searchKeyword": "",
        "sortBy": { "sortField": "CUSTOM", "sortOrder": "ASCENDING" }
    })
}

// ---------- 响应 ----------
/// 显式的 `null` 与缺失字段一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// GraphQL 返回的根结构
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl<T> GraphQLResponse<T> {
    /// 第一条错误信息
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteListData {
    pub favorite_question_list: Option<FavoriteQuestionList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteQuestionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<FavoriteQuestion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_length: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_frontend_id: String,
}
