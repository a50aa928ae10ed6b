//! Command-line argument parsing for the demo host
//!
//! The demo mounts one field and drives it from a line-based script on stdin:
//!
//! ```text
//! focus
//! type acme
//! wait
//! down
//! enter
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::policy::Mode;
use crate::registry::EntityDomain;

/// Drive a search-select field from a script on stdin
#[derive(Parser, Debug)]
#[command(
    name = "search-select",
    version,
    about = "Drive a search-select field from a script on stdin"
)]
pub struct CliArgs {
    /// Entity domain the field selects from
    #[arg(short, long, value_enum, default_value_t = EntityDomain::Supplier)]
    pub domain: EntityDomain,

    /// Exit policy: form field or grid cell editor
    #[arg(short, long, value_enum, default_value_t = Mode::Form)]
    pub mode: Mode,

    /// Registry file with one name per line (defaults to the domain's registry)
    #[arg(short, long, value_name = "CSV")]
    pub registry: Option<PathBuf>,

    /// Initially committed value
    #[arg(long, default_value = "")]
    pub value: String,

    /// Override the configured lookup debounce
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["search-select"]);
        assert_eq!(args.domain, EntityDomain::Supplier);
        assert_eq!(args.mode, Mode::Form);
        assert!(args.registry.is_none());
        assert_eq!(args.value, "");
        assert_eq!(args.debounce_ms, None);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse_from([
            "search-select",
            "--domain",
            "item-type",
            "--mode",
            "cell-editor",
            "--registry",
            "types.csv",
            "--value",
            "Widget",
            "--debounce-ms",
            "10",
        ]);
        assert_eq!(args.domain, EntityDomain::ItemType);
        assert_eq!(args.mode, Mode::CellEditor);
        assert_eq!(args.registry, Some(PathBuf::from("types.csv")));
        assert_eq!(args.value, "Widget");
        assert_eq!(args.debounce_ms, Some(10));
    }
}
