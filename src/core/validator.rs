use crate::core::answers::ANSWER_SEPARATOR;
use crate::domain::model::ConvertedQuiz;
use crate::utils::error::Result;
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 3] = ["question", "description", "textAnswer"];
const ANSWER_KEYS: [&str; 4] = ["1", "2", "3", "4"];

/// 檢查轉換後的資料結構，回傳人類可讀的錯誤清單 (空清單表示通過)。
/// 只做檢查，不會修改資料。
pub fn validate_output(output: &Map<String, Value>) -> Vec<String> {
    let mut errors = Vec::new();

    for (key, question) in output {
        let Some(question) = question.as_object() else {
            errors.push(format!("Question {}: Entry must be a JSON object", key));
            continue;
        };

        for field in REQUIRED_FIELDS {
            if !question.contains_key(field) {
                errors.push(format!("Question {}: Missing '{}' field", key, field));
            }
        }

        let Some(text_answer) = question.get("textAnswer") else {
            continue;
        };
        let Some(text_answer) = text_answer.as_object() else {
            errors.push(format!("Question {}: 'textAnswer' must be a JSON object", key));
            continue;
        };

        if text_answer.len() != ANSWER_KEYS.len() {
            errors.push(format!(
                "Question {}: Expected 4 textAnswer options, got {}",
                key,
                text_answer.len()
            ));
        }

        let keys_match = text_answer.len() == ANSWER_KEYS.len()
            && ANSWER_KEYS.iter().all(|k| text_answer.contains_key(*k));
        if !keys_match {
            errors.push(format!(
                "Question {}: textAnswer keys must be '1', '2', '3', '4'",
                key
            ));
        }

        // 選項 1 是多項時，其他選項也必須是多項，否則一眼就能看出正解
        let first_is_list = text_answer
            .get("1")
            .and_then(Value::as_str)
            .is_some_and(|s| s.contains(ANSWER_SEPARATOR));
        if first_is_list {
            for option_key in &ANSWER_KEYS[1..] {
                let Some(option) = text_answer.get(*option_key) else {
                    continue;
                };
                let is_list = option
                    .as_str()
                    .is_some_and(|s| s.contains(ANSWER_SEPARATOR));
                if !is_list {
                    errors.push(format!(
                        "Question {}: Option {} should have multiple items like option 1",
                        key, option_key
                    ));
                }
            }
        }
    }

    errors
}

/// 對轉換結果做同樣的檢查
pub fn validate_quiz(quiz: &ConvertedQuiz) -> Result<Vec<String>> {
    match serde_json::to_value(quiz)? {
        Value::Object(map) => Ok(validate_output(&map)),
        _ => Ok(Vec::new()),
    }
}
