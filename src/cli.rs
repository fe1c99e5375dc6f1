//! CLI argument parsing module for snapdeps

use crate::descriptor::DEFAULT_DESCRIPTOR_NAME;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout string: Nms (milliseconds), Ns (seconds), Nm (minutes)
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty timeout string".to_string());
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, "ms")
    } else if let Some(n) = s.strip_suffix('s') {
        (n, "s")
    } else if let Some(n) = s.strip_suffix('m') {
        (n, "m")
    } else {
        return Err(format!("invalid timeout format: {}", s));
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in timeout: {}", num_str))?;
    if num == 0 {
        return Err("timeout must be greater than zero".to_string());
    }

    let too_large = || format!("timeout too large: {}", s);
    Ok(match unit {
        "ms" => Duration::from_millis(num),
        "s" => Duration::from_secs(num),
        _ => Duration::from_secs(num.checked_mul(60).ok_or_else(too_large)?),
    })
}

/// Resolve in-development sibling dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snapdeps",
    version,
    about = "Resolve SNAPSHOT sibling dependencies of a project"
)]
pub struct CliArgs {
    /// Root project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Descriptor file name inside the root directory
    #[arg(short = 'f', long, default_value = DEFAULT_DESCRIPTOR_NAME)]
    pub descriptor: String,

    /// Network timeout for probes and downloads (e.g., 500ms, 5s, 1m)
    #[arg(long, value_parser = parse_timeout, default_value = "5s")]
    pub timeout: Duration,

    // Output options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only resolved sibling names
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Path of the root descriptor file
    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(&self.descriptor)
    }

    /// Whether the progress spinner should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["snapdeps"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.descriptor, "project.toml");
        assert_eq!(args.timeout, Duration::from_secs(5));
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
        assert!(!args.no_color);
    }

    #[test]
    fn test_path_and_descriptor() {
        let args = CliArgs::parse_from(["snapdeps", "/work/app", "-f", "project.json"]);
        assert_eq!(args.descriptor_path(), PathBuf::from("/work/app/project.json"));
    }

    #[test]
    fn test_timeout_flag() {
        let args = CliArgs::parse_from(["snapdeps", "--timeout", "750ms"]);
        assert_eq!(args.timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["snapdeps", "-q", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_progress() {
        assert!(CliArgs::parse_from(["snapdeps"]).show_progress());
        assert!(!CliArgs::parse_from(["snapdeps", "--quiet"]).show_progress());
        assert!(!CliArgs::parse_from(["snapdeps", "--json"]).show_progress());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_timeout("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_timeout(" 3s ").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("10").is_err());
        assert!(parse_timeout("10h").is_err());
        assert!(parse_timeout("0s").is_err());
    }

    #[test]
    fn test_parse_timeout_minutes_overflow() {
        let huge = format!("{}m", u64::MAX);
        let err = parse_timeout(&huge).unwrap_err();
        assert!(err.contains("too large"));
        assert!(CliArgs::try_parse_from(["snapdeps", "--timeout", &huge]).is_err());
    }
}
