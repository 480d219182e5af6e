use postbridge::config::Config;
use postbridge::error::Result;

/// Run the init command to generate a default configuration
pub fn run(output: Option<String>) -> Result<()> {
    let config = Config::default();

    if let Some(output_path) = output {
        postbridge::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated {}", output_path);
        tracing::info!("🚀 Ready to serve! Run: postbridge serve --config {}", output_path);
    } else {
        // Output to stdout
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    tracing::info!("   Users are stored in {}", config.database.url);
    tracing::info!("   Posts are fetched from {}", config.posts.base_url);
    tracing::info!("   Override any key with POSTBRIDGE__<SECTION>__<KEY>, e.g. POSTBRIDGE__DATABASE__URL");

    Ok(())
}
