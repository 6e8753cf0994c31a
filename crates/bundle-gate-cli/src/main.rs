// crates/bundle-gate-cli/src/main.rs
// ============================================================================
// Module: Bundle Gate CLI Entry Point
// Description: Command dispatcher for property bundle validation runs.
// Purpose: Provide a safe, localized CLI for scanning and validating bundles.
// Dependencies: clap, bundle-gate-core, bundle-gate-scan, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The Bundle Gate CLI scans a directory tree for property bundles, builds
//! one validation case per match, runs every case, and reports the outcome
//! as localized text or JSON. All user-facing strings are routed through the
//! i18n catalog to prepare for future localization.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use bundle_gate_cli::config::BundleGateConfig;
use bundle_gate_cli::i18n::Locale;
use bundle_gate_cli::i18n::set_locale;
use bundle_gate_cli::report::CaseReport;
use bundle_gate_cli::report::SuiteReport;
use bundle_gate_cli::t;
use bundle_gate_core::PROPERTIES_EXTENSION;
use bundle_gate_core::PlatformVersion;
use bundle_gate_core::Resource;
use bundle_gate_core::SuiteBuilder;
use bundle_gate_core::ValidatorOptions;
use bundle_gate_core::encoding_gate;
use bundle_gate_scan::scan;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "BUNDLE_GATE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "bundle-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `BUNDLE_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every property bundle under a directory tree.
    Check(CheckCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments of the `check` command.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Root directory to scan for property bundles.
    root: PathBuf,
    /// Output format for the suite outcome.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Probed host platform version (overrides the config file).
    #[arg(long, value_name = "VERSION")]
    platform_version: Option<String>,
    /// Encoding-ambiguity check mode.
    #[arg(long, value_enum, default_value_t = EncodingCheckArg::Auto)]
    encoding_check: EncodingCheckArg,
    /// File extension of property bundles (overrides the config file).
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate a configuration file.
    Validate {
        /// Path to the TOML configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Output format selector for the check command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Localized text lines.
    Text,
    /// Structured JSON report.
    Json,
}

/// Encoding-ambiguity check mode selector.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EncodingCheckArg {
    /// Derive the gate from the platform version (skip when unknown).
    Auto,
    /// Force the check on.
    On,
    /// Force the check off.
    Off,
}

/// Locale flag values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Check(command) => command_check(&command),
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

/// Executes the `check` command.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let config = BundleGateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;

    let extension = command
        .extension
        .clone()
        .or(config.scan.extension)
        .unwrap_or_else(|| PROPERTIES_EXTENSION.to_string());
    let version = resolve_platform_version(
        command.platform_version.as_deref(),
        config.encoding.platform_version.as_deref(),
    )?;
    let check_encoding = resolve_encoding_check(command.encoding_check, version.as_ref());

    let resources = scan(&command.root, &extension).map_err(|err| {
        CliError::new(t!("check.scan_failed", path = command.root.display(), error = err))
    })?;
    let builder = SuiteBuilder::new(ValidatorOptions::new(check_encoding));
    let cases = builder.build(
        resources
            .into_iter()
            .map(|resource| Resource::from_path(resource.path, resource.display_name)),
    );

    let mut reports = Vec::with_capacity(cases.len());
    for case in &cases {
        let outcome = case.run();
        reports.push(CaseReport::from_outcome(case.name(), &outcome));
    }
    let report =
        SuiteReport::new(command.root.display().to_string(), extension, check_encoding, reports);

    match command.format {
        OutputFormat::Text => render_text_report(&report)?,
        OutputFormat::Json => render_json_report(&report)?,
    }

    if report.is_pass() { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::FAILURE) }
}

/// Resolves the platform version from the flag, then the config file.
fn resolve_platform_version(
    flag: Option<&str>,
    config: Option<&str>,
) -> CliResult<Option<PlatformVersion>> {
    let Some(value) = flag.or(config) else {
        return Ok(None);
    };
    PlatformVersion::from_str(value)
        .map(Some)
        .map_err(|err| CliError::new(t!("check.version.invalid", value = value, error = err)))
}

/// Resolves the encoding-check gate from the mode flag and platform version.
fn resolve_encoding_check(mode: EncodingCheckArg, version: Option<&PlatformVersion>) -> bool {
    match mode {
        EncodingCheckArg::On => true,
        EncodingCheckArg::Off => false,
        EncodingCheckArg::Auto => encoding_gate(version),
    }
}

/// Renders the suite outcome as localized text lines.
fn render_text_report(report: &SuiteReport) -> CliResult<()> {
    for case in &report.cases {
        if let Some(message) = &case.message {
            write_stdout_line(&t!("check.case.fail", name = case.name, error = message))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    let summary = if report.is_pass() {
        t!("check.summary.ok", count = report.total)
    } else {
        t!("check.summary.fail", failed = report.failed, count = report.total)
    };
    write_stdout_line(&summary).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Renders the suite outcome as a JSON report.
fn render_json_report(report: &SuiteReport) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(report)
        .map_err(|err| CliError::new(t!("check.report.render_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes the `config` command.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate {
            config,
        } => {
            BundleGateConfig::load(config.as_deref())
                .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
            write_stdout_line(&t!("config.validate.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the CLI locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    let Some(value) = env_lang else {
        return Ok(Locale::En);
    };
    if value.trim().is_empty() {
        return Ok(Locale::En);
    }
    Locale::parse(value).ok_or_else(|| {
        CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Prints top-level help when no subcommand is given.
fn show_help() -> CliResult<()> {
    Cli::command()
        .print_help()
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}
