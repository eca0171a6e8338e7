use std::path::PathBuf;

use crate::cli::commands::ValidateArgs;
use traversal_detector::config::parse_config;
use traversal_detector::errors::DetectorError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), DetectorError> {
    let path = PathBuf::from(&args.config);
    let config = parse_config(&path).await?;
    println!(
        "Configuration is valid: {} (injection points: {})",
        args.config,
        config
            .injection_points
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
