//! 由正確答案與干擾選項組出遊戲用的四個選項。

use crate::domain::model::TextAnswer;

pub const ANSWER_SEPARATOR: &str = ", ";

fn option_at(options: &[String], index: usize) -> String {
    options.get(index).cloned().unwrap_or_default()
}

/// 單選題：選項 1 固定是正確答案，2-4 依序放干擾選項，不足補空字串。
///
/// 沒有任何正確答案時回傳 `None`。
pub fn single_answer(correct: &[String], options: &[String]) -> Option<TextAnswer> {
    let answer = correct.first()?;
    Some(TextAnswer::new(
        answer.clone(),
        option_at(options, 0),
        option_at(options, 1),
        option_at(options, 2),
    ))
}

/// 有干擾選項時放在最前面接上 `tail`，沒有時改用 `fallback`
fn lead_with(distractor: Option<&str>, tail: &[&str], fallback: &[&str]) -> String {
    match distractor {
        Some(d) => std::iter::once(d)
            .chain(tail.iter().copied())
            .collect::<Vec<_>>()
            .join(ANSWER_SEPARATOR),
        None => fallback.join(ANSWER_SEPARATOR),
    }
}

/// 多選題：四個選項都是以 ", " 串接的多項內容，避免從格式看出正解。
///
/// - 選項 1：全部正確答案
/// - 選項 2：干擾 0 + 正確答案[1..]
/// - 選項 3：干擾 1 + 正確答案輪轉兩位 (只有兩個時為 [最後, 第一])
/// - 選項 4：干擾 2 + 正確答案去掉最後一個
///
/// 正確答案少於兩個時，選項 2-4 只放對應的干擾選項，缺少則放全部正確答案。
pub fn multiple_answer(correct: &[String], options: &[String]) -> TextAnswer {
    let c: Vec<&str> = correct.iter().map(String::as_str).collect();
    let distractor = |i: usize| options.get(i).map(String::as_str);

    let first = c.join(ANSWER_SEPARATOR);

    if c.len() >= 2 {
        let n = c.len();
        let rotated: Vec<&str> = if n > 2 {
            [&c[2..], &c[..2]].concat()
        } else {
            vec![c[n - 1], c[0]]
        };
        let head = &c[..n - 1];

        TextAnswer::new(
            first,
            lead_with(distractor(0), &c[1..], &c),
            lead_with(distractor(1), &rotated, &rotated),
            lead_with(distractor(2), head, head),
        )
    } else {
        TextAnswer::new(
            first,
            lead_with(distractor(0), &[], &c),
            lead_with(distractor(1), &[], &c),
            lead_with(distractor(2), &[], &c),
        )
    }
}
