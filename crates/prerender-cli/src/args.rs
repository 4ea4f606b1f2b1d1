//! Command-line arguments

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use prerender::Config;

pub const USAGE: &str = "\
usage: prerender <bundle.js> [requests.json] [options]

Requests are a JSON object {\"name\": ..., \"data\": ...} or an array of them,
read from stdin when no file is given.

options:
    --keyed                 print results as an object keyed by component name
    --forward-console       log console.* calls made by components
    --memory-limit <bytes>  cap the JavaScript heap per render
    --max-stack-size <bytes>
                            cap the JavaScript stack per render
    --root-tag <tag>        tag of the containers components mount into
    -h, --help              print this message";

/// Parsed command line
#[derive(Debug, Default)]
pub struct Args {
    pub bundle: PathBuf,
    pub requests: Option<PathBuf>,
    pub keyed: bool,
    pub help: bool,
    pub config: Config,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut positional = Vec::new();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--keyed" => parsed.keyed = true,
                "--forward-console" => parsed.config.forward_console = true,
                "--memory-limit" => {
                    let value = iter.next().context("--memory-limit needs a value")?;
                    let bytes = value
                        .parse()
                        .with_context(|| format!("invalid --memory-limit `{value}`"))?;
                    parsed.config.memory_limit = Some(bytes);
                }
                "--max-stack-size" => {
                    let value = iter.next().context("--max-stack-size needs a value")?;
                    let bytes = value
                        .parse()
                        .with_context(|| format!("invalid --max-stack-size `{value}`"))?;
                    parsed.config.max_stack_size = Some(bytes);
                }
                "--root-tag" => {
                    parsed.config.root_tag = iter.next().context("--root-tag needs a value")?;
                }
                flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        if parsed.help {
            return Ok(parsed);
        }

        let mut positional = positional.into_iter();
        parsed.bundle = positional.next().context("missing bundle path")?;
        parsed.requests = positional.next();
        if let Some(extra) = positional.next() {
            bail!("unexpected argument `{}`", extra.display());
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_bundle_only() {
        let args = parse(&["dist/app.bundle.js"]).unwrap();
        assert_eq!(args.bundle, PathBuf::from("dist/app.bundle.js"));
        assert!(args.requests.is_none());
        assert!(!args.keyed);
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "app.js",
            "requests.json",
            "--keyed",
            "--forward-console",
            "--memory-limit",
            "1048576",
            "--max-stack-size",
            "262144",
            "--root-tag",
            "main",
        ])
        .unwrap();
        assert_eq!(args.requests, Some(PathBuf::from("requests.json")));
        assert!(args.keyed);
        assert!(args.config.forward_console);
        assert_eq!(args.config.memory_limit, Some(1048576));
        assert_eq!(args.config.max_stack_size, Some(262144));
        assert_eq!(args.config.root_tag, "main");
    }

    #[test]
    fn test_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.js", "--memory-limit", "lots"]).is_err());
        assert!(parse(&["a.js", "--max-stack-size"]).is_err());
        assert!(parse(&["a.js", "--max-stack-size", "-1"]).is_err());
        assert!(parse(&["a.js", "--bogus"]).is_err());
        assert!(parse(&["a.js", "b.json", "c.json"]).is_err());
    }

    #[test]
    fn test_help_needs_no_bundle() {
        assert!(parse(&["--help"]).unwrap().help);
    }
}
