use quiz_etl::config::parse_or_exit;
use quiz_etl::utils::{logger, validation::Validate};
use quiz_etl::{EtlEngine, LocalStorage, MergeArgs, MergePipeline};

#[tokio::main]
async fn main() {
    let args = parse_or_exit::<MergeArgs>();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting combine_data");

    // 命令列參數與合併計畫都要先通過驗證
    let plan = match args.validate().and_then(|_| args.plan()) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Failed to build merge plan: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    if let Err(e) = plan.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    for source in &plan.sources {
        tracing::info!("📁 {} (offset {})", source.path, source.offset);
    }
    tracing::info!("📁 Output: {}", plan.output);

    let pipeline = MergePipeline::new(LocalStorage::current_dir(), plan);
    let engine = EtlEngine::new_with_monitoring(pipeline, args.monitor);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "❌ Merge failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}
