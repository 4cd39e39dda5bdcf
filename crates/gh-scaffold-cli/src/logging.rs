//! Diagnostics go to stderr through one `tracing` subscriber, so stdout stays
//! free for reports, previews and JSON.
//!
//! `-v` raises the gh-scaffold crates to INFO, `-vv` to DEBUG (one event per
//! reconcile decision), `-vvv` to TRACE. `--quiet` keeps errors only. A set
//! `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the verbosity flags control. Dependencies stay at
/// their default (off) unless `RUST_LOG` names them.
const CRATE_TARGETS: [&str; 3] = ["gh_scaffold", "gh_scaffold_core", "gh_scaffold_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        // Which crate spoke only matters once per-file decisions show up.
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `EnvFilter` directives giving every gh-scaffold crate `level`.
fn directives(level: LevelFilter) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            prefs: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        let cases = [
            (0, LevelFilter::WARN),
            (1, LevelFilter::INFO),
            (2, LevelFilter::DEBUG),
            (3, LevelFilter::TRACE),
            (9, LevelFilter::TRACE),
        ];
        for (verbose, expected) in cases {
            assert_eq!(level_for(&flags(verbose, false)), expected, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(level_for(&flags(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&flags(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "gh_scaffold=debug,gh_scaffold_core=debug,gh_scaffold_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_a_filter() {
        assert!(EnvFilter::try_new(directives(LevelFilter::WARN)).is_ok());
    }
}
