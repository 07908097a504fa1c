use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");

        tracing::info!("📥 Extracting data...");
        let raw_data = self.pipeline.extract().await?;
        self.monitor.log_phase("Extract");

        tracing::info!("🔄 Transforming data...");
        let transformed = self.pipeline.transform(raw_data).await?;
        self.monitor.log_phase("Transform");

        tracing::info!("💾 Loading data...");
        let output_path = self.pipeline.load(transformed).await?;
        self.monitor.log_phase("Load");

        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
        fail_transform: bool,
    }

    impl RecordingPipeline {
        fn new(fail_transform: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_transform,
            }
        }
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        type Extracted = Vec<u32>;
        type Transformed = u32;

        async fn extract(&self) -> Result<Vec<u32>> {
            self.calls.lock().unwrap().push("extract");
            Ok(vec![1, 2, 3])
        }

        async fn transform(&self, data: Vec<u32>) -> Result<u32> {
            self.calls.lock().unwrap().push("transform");
            if self.fail_transform {
                return Err(EtlError::ValidationRejected { errors: 1 });
            }
            Ok(data.iter().sum())
        }

        async fn load(&self, result: u32) -> Result<String> {
            self.calls.lock().unwrap().push("load");
            Ok(format!("out/{}.json", result))
        }
    }

    #[tokio::test]
    async fn test_run_executes_phases_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::new(false));
        let output = engine.run().await.unwrap();

        assert_eq!(output, "out/6.json");
        assert_eq!(
            *engine.pipeline().calls.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_transform_failure_skips_load() {
        let engine = EtlEngine::new(RecordingPipeline::new(true));
        let result = engine.run().await;

        assert!(matches!(result, Err(EtlError::ValidationRejected { .. })));
        assert_eq!(
            *engine.pipeline().calls.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }
}
