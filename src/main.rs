//! vlist - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vlist::config::CliOverrides;
use vlist::model::AppError;
use vlist::view::{ColorConfig, ListStyles};

/// vlist - scroll a very long list while rendering only the visible rows
#[derive(Parser, Debug)]
#[command(name = "vlist")]
#[command(version)]
#[command(about = "Windowed list virtualizer demo: renders only the rows in view")]
pub struct Args {
    /// Number of demo items to generate
    #[arg(short = 'n', long)]
    pub items: Option<usize>,

    /// Height of every item in rows (must be > 0)
    #[arg(long, allow_negative_numbers = true)]
    pub item_height: Option<i64>,

    /// Cap on the list height in rows (must be > 0)
    #[arg(long, allow_negative_numbers = true)]
    pub max_height: Option<i64>,

    /// Items rendered beyond each edge of the viewport
    #[arg(short, long)]
    pub overscan: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            item_count: self.items,
            item_height: self.item_height,
            max_height: self.max_height,
            overscan: self.overscan,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = vlist::config::load_config_with_precedence(args.config.clone())?;
        let merged = vlist::config::merge_config(config_file);
        let with_env = vlist::config::apply_env_overrides(merged);
        vlist::config::apply_cli_overrides(with_env, args.overrides())
    };

    // Reject bad dimensions before touching the terminal.
    let list_config = config.virtualizer_config()?;

    vlist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let styles = ListStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let items = vlist::view::demo_items(config.item_count);

    vlist::view::run_with_config(items, list_config, styles)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["vlist", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["vlist", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["vlist"]);
        assert_eq!(args.items, None);
        assert_eq!(args.item_height, None);
        assert_eq!(args.max_height, None);
        assert_eq!(args.overscan, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_items_short_and_long() {
        assert_eq!(Args::parse_from(["vlist", "-n", "50"]).items, Some(50));
        assert_eq!(Args::parse_from(["vlist", "--items", "100000"]).items, Some(100_000));
    }

    #[test]
    fn test_items_rejects_negative() {
        let result = Args::try_parse_from(["vlist", "--items", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_height_accepts_negative_for_validation() {
        let args = Args::parse_from(["vlist", "--item-height", "-3"]);
        assert_eq!(args.item_height, Some(-3));
    }

    #[test]
    fn test_negative_item_height_fails_virtualizer_config() {
        let args = Args::parse_from(["vlist", "--item-height", "-3"]);
        let config = vlist::config::apply_cli_overrides(
            vlist::config::ResolvedConfig::default(),
            args.overrides(),
        );
        let err = config.virtualizer_config().unwrap_err();
        assert_eq!(err.to_string(), "item_height must be > 0 (got -3)");
    }

    #[test]
    fn test_max_height_flag() {
        let args = Args::parse_from(["vlist", "--max-height", "40"]);
        assert_eq!(args.max_height, Some(40));
    }

    #[test]
    fn test_overscan_short_and_long() {
        assert_eq!(Args::parse_from(["vlist", "-o", "0"]).overscan, Some(0));
        assert_eq!(Args::parse_from(["vlist", "--overscan", "5"]).overscan, Some(5));
    }

    #[test]
    fn test_item_height_rejects_text() {
        let result = Args::try_parse_from(["vlist", "--item-height", "tall"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["vlist", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["vlist", "--config", "/tmp/vlist.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/vlist.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "vlist",
            "--items",
            "500",
            "--item-height",
            "2",
            "--max-height",
            "12",
            "--overscan",
            "1",
            "--no-color",
        ]);
        assert_eq!(
            args.overrides(),
            CliOverrides {
                item_count: Some(500),
                item_height: Some(2),
                max_height: Some(12),
                overscan: Some(1),
            }
        );
        assert!(args.no_color);
    }

    #[test]
    fn test_cli_overrides_flow_through_precedence_chain() {
        let args = Args::parse_from(["vlist", "--overscan", "6"]);
        let file = vlist::config::ConfigFile {
            overscan: Some(1),
            item_count: Some(77),
            ..Default::default()
        };

        let merged = vlist::config::merge_config(Some(file));
        let resolved = vlist::config::apply_cli_overrides(merged, args.overrides());

        assert_eq!(resolved.overscan, 6, "CLI should override config file");
        assert_eq!(resolved.item_count, 77, "config file value should survive");
        assert_eq!(resolved.virtualizer_config().unwrap().overscan(), 6);
    }
}
