use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 題目編號：來源檔可能是字串 ("07") 或整數 (7)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemNumber {
    Number(i64),
    Text(String),
}

impl Default for ItemNumber {
    fn default() -> Self {
        ItemNumber::Text(String::new())
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemNumber::Number(n) => write!(f, "{}", n),
            ItemNumber::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerType {
    Single,
    Multiple,
}

impl AnswerType {
    /// 只有 "single" 算單選，其他值一律當作多選
    pub fn from_label(label: &str) -> Self {
        if label == "single" {
            AnswerType::Single
        } else {
            AnswerType::Multiple
        }
    }
}

/// 來源題目格式 (summary 陣列中的一筆)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionRecord {
    #[serde(rename = "item-number", alias = "item_number")]
    pub item_number: ItemNumber,
    pub question: String,
    #[serde(rename = "correct-answer")]
    pub correct_answer: Vec<String>,
    #[serde(rename = "answer-type")]
    pub answer_type: String,
    pub options: Vec<String>,
    #[serde(rename = "answer-explanation")]
    pub answer_explanation: String,
}

impl Default for QuestionRecord {
    fn default() -> Self {
        Self {
            item_number: ItemNumber::default(),
            question: String::new(),
            correct_answer: Vec::new(),
            answer_type: "single".to_string(),
            options: Vec::new(),
            answer_explanation: String::new(),
        }
    }
}

impl QuestionRecord {
    pub fn kind(&self) -> AnswerType {
        AnswerType::from_label(&self.answer_type)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizSource {
    #[serde(default)]
    pub summary: Vec<QuestionRecord>,
}

/// 遊戲端使用的四個選項，固定鍵 "1".."4"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnswer {
    #[serde(rename = "1")]
    pub first: String,
    #[serde(rename = "2")]
    pub second: String,
    #[serde(rename = "3")]
    pub third: String,
    #[serde(rename = "4")]
    pub fourth: String,
}

impl TextAnswer {
    pub fn new(first: String, second: String, third: String, fourth: String) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    pub fn slots(&self) -> [&str; 4] {
        [&self.first, &self.second, &self.third, &self.fourth]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedQuestion {
    pub question: String,
    pub description: String,
    #[serde(rename = "textAnswer")]
    pub text_answer: TextAnswer,
}

/// 轉換後的題庫，保留第一次插入的順序
pub type ConvertedQuiz = IndexMap<String, ConvertedQuestion>;

/// 合併後的資料集；serde_json 啟用 preserve_order，維持插入順序
pub type MergedDataset = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub questions: ConvertedQuiz,
    pub validation_errors: Vec<String>,
}

/// 驗證失敗時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Prompt,
    Continue,
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSource {
    pub path: String,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    pub sources: Vec<MergeSource>,
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: String,
    pub offset: i64,
    pub entries: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct MergeResult {
    pub dataset: MergedDataset,
    /// (來源路徑, 筆數)
    pub source_counts: Vec<(String, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let record: QuestionRecord = serde_json::from_str(r#"{"item-number": "3"}"#).unwrap();
        assert_eq!(record.item_number, ItemNumber::Text("3".to_string()));
        assert_eq!(record.question, "");
        assert!(record.correct_answer.is_empty());
        assert_eq!(record.kind(), AnswerType::Single);
        assert!(record.options.is_empty());
        assert_eq!(record.answer_explanation, "");
    }

    #[test]
    fn test_record_accepts_numeric_item_number_and_alias() {
        let record: QuestionRecord =
            serde_json::from_str(r#"{"item_number": 12, "answer-type": "multiple"}"#).unwrap();
        assert_eq!(record.item_number, ItemNumber::Number(12));
        assert_eq!(record.kind(), AnswerType::Multiple);
    }

    #[test]
    fn test_unknown_answer_type_is_multiple() {
        assert_eq!(AnswerType::from_label("checkbox"), AnswerType::Multiple);
        assert_eq!(AnswerType::from_label("single"), AnswerType::Single);
    }

    #[test]
    fn test_text_answer_serializes_numbered_keys() {
        let answer = TextAnswer::new("a".into(), "b".into(), "c".into(), "d".into());
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"1": "a", "2": "b", "3": "c", "4": "d"})
        );
    }
}
