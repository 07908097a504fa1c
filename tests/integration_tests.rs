use anyhow::Result;
use quiz_etl::core::Confirm;
use quiz_etl::domain::model::ValidationPolicy;
use quiz_etl::{ConvertConfig, ConvertPipeline, EtlEngine, EtlError, LocalStorage};
use tempfile::TempDir;

struct Answer(bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn config(input: &str, output: &str, policy: ValidationPolicy) -> ConvertConfig {
    ConvertConfig {
        input: input.to_string(),
        output: output.to_string(),
        on_validation_error: policy,
        verbose: false,
        monitor: false,
        log_json: false,
    }
}

const SUMMARY: &str = r#"{
  "summary": [
    {
      "item-number": "001",
      "question": "Which planet is known as the Red Planet?",
      "correct-answer": ["Mars"],
      "answer-type": "single",
      "options": ["Venus", "Jupiter", "Saturn"],
      "answer-explanation": "Iron oxide gives Mars its colour.",
      "answer-explanation-link": "https://example.com/mars"
    },
    {
      "item-number": "002",
      "question": "Which are prime numbers?",
      "correct-answer": ["2", "3", "5"],
      "answer-type": "multiple",
      "options": ["4", "6", "9"],
      "answer-explanation": "Primes have exactly two divisors."
    },
    {
      "item-number": "010",
      "question": "Choose the café drinks",
      "correct-answer": ["Espresso", "Latte"],
      "answer-type": "multiple",
      "options": ["Brot", "Käse", "Apfel"],
      "answer-explanation": "Both are coffee."
    }
  ]
}"#;

#[tokio::test]
async fn test_end_to_end_conversion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ai-engr1.json");
    let output = temp_dir.path().join("data/out/ai-engr.json");
    std::fs::write(&input, SUMMARY)?;

    let pipeline = ConvertPipeline::with_confirm(
        LocalStorage::current_dir(),
        config(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ValidationPolicy::Prompt,
        ),
        Answer(false),
    );
    let engine = EtlEngine::new(pipeline);
    let path = engine.run().await?;

    assert_eq!(path, output.to_str().unwrap());
    assert!(output.exists());

    let written = std::fs::read_to_string(&output)?;
    assert!(written.contains("Käse"));
    assert!(written.starts_with("{\n  \"1\": {"));

    let json: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(
        json,
        serde_json::json!({
            "1": {
                "question": "Which planet is known as the Red Planet?",
                "description": "Iron oxide gives Mars its colour.",
                "textAnswer": {"1": "Mars", "2": "Venus", "3": "Jupiter", "4": "Saturn"}
            },
            "2": {
                "question": "Which are prime numbers?",
                "description": "Primes have exactly two divisors.",
                "textAnswer": {
                    "1": "2, 3, 5",
                    "2": "4, 3, 5",
                    "3": "6, 5, 2, 3",
                    "4": "9, 2, 3"
                }
            },
            "10": {
                "question": "Choose the café drinks",
                "description": "Both are coffee.",
                "textAnswer": {
                    "1": "Espresso, Latte",
                    "2": "Brot, Latte",
                    "3": "Käse, Latte, Espresso",
                    "4": "Apfel, Espresso"
                }
            }
        })
    );

    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["1", "2", "10"]);
    Ok(())
}

#[tokio::test]
async fn test_rerun_produces_identical_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.json");
    std::fs::write(&input, SUMMARY)?;

    let mut outputs = Vec::new();
    for name in ["first.json", "second.json"] {
        let output = temp_dir.path().join(name);
        let pipeline = ConvertPipeline::with_confirm(
            LocalStorage::current_dir(),
            config(
                input.to_str().unwrap(),
                output.to_str().unwrap(),
                ValidationPolicy::Abort,
            ),
            Answer(false),
        );
        EtlEngine::new(pipeline).run().await?;
        outputs.push(std::fs::read(&output)?);
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[tokio::test]
async fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("missing.json");
    let output = temp_dir.path().join("out.json");

    let pipeline = ConvertPipeline::with_confirm(
        LocalStorage::current_dir(),
        config(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ValidationPolicy::Prompt,
        ),
        Answer(true),
    );
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, EtlError::FileNotFound { .. }));
    assert_eq!(err.severity().exit_code(), 1);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("broken.json");
    let output = temp_dir.path().join("out.json");
    std::fs::write(&input, r#"{"summary": [ {"item-number": "1", } ]}"#)?;

    let pipeline = ConvertPipeline::with_confirm(
        LocalStorage::current_dir(),
        config(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ValidationPolicy::Prompt,
        ),
        Answer(true),
    );
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, EtlError::InvalidJson { .. }));
    assert_eq!(err.severity().exit_code(), 1);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_declined_validation_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.json");
    let output = temp_dir.path().join("out.json");
    std::fs::write(
        &input,
        r#"{"summary": [{"item-number": "4", "correct-answer": ["A", "B"], "answer-type": "multiple"}]}"#,
    )?;

    let declined = ConvertPipeline::with_confirm(
        LocalStorage::current_dir(),
        config(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ValidationPolicy::Prompt,
        ),
        Answer(false),
    );
    let err = EtlEngine::new(declined).run().await.unwrap_err();
    assert!(matches!(err, EtlError::ValidationRejected { errors: 1 }));
    assert_eq!(err.severity().exit_code(), 1);
    assert!(!output.exists());

    // 接受後仍會寫出有問題的資料
    let accepted = ConvertPipeline::with_confirm(
        LocalStorage::current_dir(),
        config(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ValidationPolicy::Prompt,
        ),
        Answer(true),
    );
    EtlEngine::new(accepted).run().await?;
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(json["4"]["textAnswer"]["4"], "A");
    Ok(())
}
