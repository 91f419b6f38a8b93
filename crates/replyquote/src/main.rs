//! `replyquote` - quoted-message render decisions from the command line.
//!
//! Reads a quote as JSON and prints the render plan the composer decides on.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use replyquote_core::{Composer, PressOutcome, PressTarget, QuoteRef, RenderPlan, Settings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Part of the rendered quote to press.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Press {
    /// The quote container.
    Quote,
    /// The dismiss control.
    Dismiss,
}

impl From<Press> for PressTarget {
    fn from(value: Press) -> Self {
        match value {
            Press::Quote => Self::Quote,
            Press::Dismiss => Self::Dismiss,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "replyquote",
    version,
    about = "Print the render plan for a quoted message"
)]
struct Cli {
    /// Quote JSON file; reads stdin when omitted
    #[arg(value_name = "QUOTE_JSON")]
    quote: Option<PathBuf>,
    /// Settings file (defaults to <config dir>/replyquote/settings.json)
    #[arg(long, value_name = "PATH", env = "REPLYQUOTE_SETTINGS")]
    settings: Option<PathBuf>,
    /// messages.json to use instead of the configured locale
    #[arg(long, value_name = "PATH")]
    locale: Option<PathBuf>,
    /// Give the quote an activation callback
    #[arg(long)]
    clickable: bool,
    /// Give the quote a dismiss callback
    #[arg(long)]
    dismissible: bool,
    /// Press part of the rendered quote and report which callbacks ran
    #[arg(long, value_enum)]
    press: Option<Press>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replyquote=info,replyquote_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = load_settings(cli.settings.as_deref(), cli.locale)?;

    let catalog = settings
        .catalog()
        .context("failed to load message catalog")?;
    let recognizer = settings.recognizer();

    let mut quote = read_quote(cli.quote.as_deref())?;
    if cli.clickable {
        quote = quote.on_activate(|| info!("quote activated"));
    }
    if cli.dismissible {
        quote = quote.on_dismiss(|| info!("quote dismissed"));
    }

    let plan = Composer::new(&catalog)
        .with_recognizer(&recognizer)
        .compose(&quote);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    if let Some(press) = cli.press {
        let outcome = press_plan(&plan, press)?;
        info!(
            activated = outcome.activated,
            dismissed = outcome.dismissed,
            "pressed {press:?}"
        );
    }

    Ok(())
}

/// Loads settings from `path` (or the default location) and applies the
/// `--locale` override.
fn load_settings(path: Option<&Path>, locale: Option<PathBuf>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load settings")?;
    if let Some(locale) = locale {
        settings.locale_path = Some(locale);
    }
    Ok(settings)
}

/// Reads a quote from `path`, or from stdin when no path is given.
fn read_quote(path: Option<&Path>) -> Result<QuoteRef> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            read_quote_from(file)
        }
        None => read_quote_from(std::io::stdin().lock()),
    }
}

fn read_quote_from(mut reader: impl Read) -> Result<QuoteRef> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .context("failed to read quote")?;
    serde_json::from_str(&contents).context("invalid quote JSON")
}

/// Presses `press` on a rendered plan. An empty plan has nothing to press.
fn press_plan(plan: &RenderPlan, press: Press) -> Result<PressOutcome> {
    let RenderPlan::Quote(plan) = plan else {
        bail!("quote rendered nothing, there is nothing to press");
    };
    Ok(plan.press(press.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use replyquote_core::{BodyBlock, Catalog};

    const TEXT_QUOTE: &str = r#"{"text": "see you at 6", "author": {"phoneNumber": "+15550100"}}"#;

    fn compose(quote: &QuoteRef) -> RenderPlan {
        Composer::new(&Catalog::english()).compose(quote)
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "replyquote",
            "quote.json",
            "--locale",
            "de.json",
            "--clickable",
            "--press",
            "dismiss",
        ])
        .unwrap();
        assert_eq!(cli.quote, Some(PathBuf::from("quote.json")));
        assert_eq!(cli.locale, Some(PathBuf::from("de.json")));
        assert!(cli.clickable);
        assert!(!cli.dismissible);
        assert!(matches!(cli.press, Some(Press::Dismiss)));
    }

    #[test]
    fn test_cli_rejects_unknown_press_target() {
        assert!(Cli::try_parse_from(["replyquote", "--press", "author"]).is_err());
    }

    #[test]
    fn test_read_quote_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.json");
        std::fs::write(&path, TEXT_QUOTE).unwrap();

        let quote = read_quote(Some(&path)).unwrap();
        assert_eq!(quote.text, "see you at 6");
    }

    #[test]
    fn test_read_quote_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = read_quote(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_read_quote_rejects_invalid_json() {
        let err = read_quote_from("{ not json".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid quote JSON"));
    }

    #[test]
    fn test_locale_flag_overrides_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(&settings_path, r#"{"localePath": "/etc/en.json"}"#).unwrap();

        let settings = load_settings(Some(&settings_path), None).unwrap();
        assert_eq!(settings.locale_path, Some(PathBuf::from("/etc/en.json")));

        let settings =
            load_settings(Some(&settings_path), Some(PathBuf::from("de.json"))).unwrap();
        assert_eq!(settings.locale_path, Some(PathBuf::from("de.json")));
    }

    #[test]
    fn test_invalid_settings_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(&settings_path, r#"{"extraVideoTypes": ["quicktime"]}"#).unwrap();
        assert!(load_settings(Some(&settings_path), None).is_err());
    }

    #[test]
    fn test_press_reports_callbacks() {
        let quote = read_quote_from(TEXT_QUOTE.as_bytes())
            .unwrap()
            .on_activate(|| {});
        let plan = compose(&quote);
        assert_eq!(
            plan.as_quote().unwrap().body,
            BodyBlock::Text("see you at 6".to_string())
        );

        let outcome = press_plan(&plan, Press::Quote).unwrap();
        assert!(outcome.activated);
        assert!(!outcome.dismissed);

        // No dismiss callback, so no dismiss control either
        let outcome = press_plan(&plan, Press::Dismiss).unwrap();
        assert!(!outcome.activated);
        assert!(!outcome.dismissed);
    }

    #[test]
    fn test_press_on_empty_plan_fails() {
        let quote = read_quote_from(r#"{"author": {"phoneNumber": "+15550100"}}"#.as_bytes())
            .unwrap()
            .on_activate(|| {});
        let plan = compose(&quote);
        assert!(plan.is_empty());
        assert!(press_plan(&plan, Press::Quote).is_err());
    }
}
