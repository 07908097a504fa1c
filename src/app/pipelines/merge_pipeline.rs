use crate::core::merge::merge_with_offsets;
use crate::core::{Pipeline, Storage};
use crate::domain::model::{LoadedSource, MergePlan, MergeResult};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

pub struct MergePipeline<S: Storage> {
    storage: S,
    plan: MergePlan,
}

impl<S: Storage> MergePipeline<S> {
    pub fn new(storage: S, plan: MergePlan) -> Self {
        Self { storage, plan }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for MergePipeline<S> {
    type Extracted = Vec<LoadedSource>;
    type Transformed = MergeResult;

    async fn extract(&self) -> Result<Vec<LoadedSource>> {
        let mut loaded = Vec::with_capacity(self.plan.sources.len());

        for source in &self.plan.sources {
            tracing::debug!("Reading {} (offset {})", source.path, source.offset);
            let bytes = self.storage.read_file(&source.path).await?;
            let value: Value =
                serde_json::from_slice(&bytes).map_err(|e| EtlError::InvalidJson {
                    path: source.path.clone(),
                    source: e,
                })?;

            let Value::Object(entries) = value else {
                return Err(EtlError::InvalidSource {
                    path: source.path.clone(),
                    reason: "top-level value must be a JSON object".to_string(),
                });
            };

            loaded.push(LoadedSource {
                path: source.path.clone(),
                offset: source.offset,
                entries,
            });
        }

        Ok(loaded)
    }

    async fn transform(&self, data: Vec<LoadedSource>) -> Result<MergeResult> {
        let dataset = merge_with_offsets(data.iter().map(|s| (&s.entries, s.offset)))?;
        let source_counts = data
            .iter()
            .map(|s| (s.path.clone(), s.entries.len()))
            .collect();

        Ok(MergeResult {
            dataset,
            source_counts,
        })
    }

    async fn load(&self, result: MergeResult) -> Result<String> {
        let json = serde_json::to_string_pretty(&result.dataset)?;
        self.storage
            .write_file(&self.plan.output, json.as_bytes())
            .await?;

        println!(
            "Successfully combined {} items into {}",
            result.dataset.len(),
            self.plan.output
        );
        for (path, count) in &result.source_counts {
            println!("Items from {}: {}", path, count);
        }

        Ok(self.plan.output.clone())
    }
}
