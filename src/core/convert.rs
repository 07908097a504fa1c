use crate::core::answers::{multiple_answer, single_answer};
use crate::core::keys::canonical_key;
use crate::domain::model::{
    AnswerType, ConvertedQuestion, ConvertedQuiz, ItemNumber, QuestionRecord, QuizSource,
};
use crate::utils::error::{EtlError, Result};

/// 轉換單一題目
pub fn convert_question(record: &QuestionRecord) -> Result<ConvertedQuestion> {
    let text_answer = match record.kind() {
        AnswerType::Single => single_answer(&record.correct_answer, &record.options).ok_or_else(
            || EtlError::MissingCorrectAnswer {
                item: record.item_number.to_string(),
            },
        )?,
        AnswerType::Multiple => multiple_answer(&record.correct_answer, &record.options),
    };

    Ok(ConvertedQuestion {
        question: record.question.clone(),
        description: record.answer_explanation.clone(),
        text_answer,
    })
}

/// 題目編號轉成輸出鍵 ("07" -> "7")
pub fn item_key(item: &ItemNumber) -> Result<String> {
    match item {
        ItemNumber::Number(n) => Ok(n.to_string()),
        ItemNumber::Text(s) => canonical_key(s),
    }
}

/// 批次轉換整份題庫。重複的鍵會直接覆蓋前一筆 (只記錄警告)。
pub fn convert_quiz(source: &QuizSource) -> Result<ConvertedQuiz> {
    let mut output = ConvertedQuiz::with_capacity(source.summary.len());

    for record in &source.summary {
        let key = item_key(&record.item_number)?;
        let converted = convert_question(record)?;

        if output.insert(key.clone(), converted).is_some() {
            tracing::warn!(
                "⚠️ Item number '{}' maps to existing key {}; previous question overwritten",
                record.item_number,
                key
            );
        }
    }

    tracing::debug!(
        "Converted {} records into {} questions",
        source.summary.len(),
        output.len()
    );
    Ok(output)
}
