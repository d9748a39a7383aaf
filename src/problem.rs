use serde::{Deserialize, Serialize};

use crate::graphql::FavoriteQuestion;

/// 输出文件名的固定后缀
const FILE_SUFFIX: &str = "-problems.json";

/// 最终输出的标准化题目结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// 题目 slug，作为主键
    pub id: String,
    pub name: String,
    pub link: String,
    /// 小写难度：easy / medium / hard
    pub difficulty: String,
}

/// 输出文件的根对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSet {
    pub name: String,
    pub problems: Vec<Problem>,
}

impl Problem {
    /// 由 GraphQL 返回的题目构造，`problem_url_base` 形如 `https://leetcode.com/problems`
    pub fn from_question(question: &FavoriteQuestion, problem_url_base: &str) -> Self {
        Self {
            id: question.title_slug.clone(),
            name: question.title.clone(),
            link: problem_link(problem_url_base, &question.title_slug),
            difficulty: question.difficulty.to_lowercase(),
        }
    }
}

impl ProblemSet {
    /// 按返回顺序映射全部题目
    pub fn from_questions(name: &str, questions: &[FavoriteQuestion], problem_url_base: &str) -> Self {
        Self {
            name: name.to_string(),
            problems: questions
                .iter()
                .map(|q| Problem::from_question(q, problem_url_base))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// 两空格缩进的 JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 由 slug 拼出题目链接
pub fn problem_link(problem_url_base: &str, slug: &str) -> String {
    format!("{}/{}", problem_url_base.trim_end_matches('/'), slug)
}

/// 由显示名称得到输出文件名：空格换成连字符并转小写
pub fn output_file_name(display_name: &str) -> String {
    format!("{}{}", display_name.replace(' ', "-").to_lowercase(), FILE_SUFFIX)
}

/// `--print` 的文本格式，每题一行
pub fn format_problem_set(problem_set: &ProblemSet) -> String {
    let mut out = format!("name: {}\n", problem_set.name);
    for problem in &problem_set.problems {
        out.push_str(&format!(
            "  [{}] {} ({})\n",
            problem.difficulty, problem.name, problem.link
        ));
    }
    out
}

pub fn print_problem_set(problem_set: &ProblemSet) {
    print!("{}", format_problem_set(problem_set));
}
