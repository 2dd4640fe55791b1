use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::error::{AppResult, FileError};
use crate::models::problem::Problem;

/// 从 JSONL 文件加载题目列表
///
/// 每行一条 JSON 记录，空行跳过；文件不存在或某行解析失败时返回错误，
/// 调用方应中止生成，不产生部分输出。
pub async fn load_problems(path: &Path) -> AppResult<Vec<Problem>> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| FileError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut problems = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let problem: Problem =
            serde_json::from_str(line).map_err(|e| FileError::JsonlParseFailed {
                path: path.display().to_string(),
                line: line_no + 1,
                source: e,
            })?;
        problems.push(problem);
    }

    info!("成功加载 {} 个题目", problems.len());
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_fails() {
        let result = tokio_test::block_on(load_problems(Path::new("no_such_file.jsonl")));

        assert!(matches!(
            result,
            Err(AppError::File(FileError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_load_problems_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.jsonl");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"question_id":"p1","question_title":"A + B","question_content":"求和","platform":"leetcode"}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"question_id":"p2","question_title":"排序","platform":"codeforces"}}"#
        )
        .unwrap();

        let problems = load_problems(&path).await.unwrap();

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].question_id, "p1");
        assert_eq!(problems[1].question_title, "排序");
        // 缺省字段按空串处理
        assert_eq!(problems[1].question_content, "");
    }

    #[tokio::test]
    async fn test_load_problems_reports_bad_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.jsonl");
        std::fs::write(
            &path,
            "{\"question_id\":\"p1\",\"question_title\":\"t\"}\nnot json\n",
        )
        .unwrap();

        let err = load_problems(&path).await.unwrap_err();
        match err {
            AppError::File(FileError::JsonlParseFailed { line, .. }) => assert_eq!(line, 2),
            other => panic!("意外的错误类型: {other}"),
        }
    }
}
