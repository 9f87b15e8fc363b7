use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use runeshow_core::input::{InputError, parse_hex_bytes, parse_hex_units, parse_rune};
use runeshow_core::text::{UnicodeDisplay, valid_rune};
use runeshow_core::{Scenario, TextReport};

mod telemetry;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RUNESHOW_BUILD_COMMIT"),
    " ",
    env!("RUNESHOW_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "runeshow")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Shows how byte strings that are not valid text decode position by position.",
    long_about = None,
    after_help = "Examples:\n  runeshow\n  runeshow demo --scenario all\n  runeshow inspect --hex 'ed a0 bd 00'\n  runeshow rune 0xd83d 0xfffffff"
)]
struct Cli {
    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a fixed demonstration (default when no command is given).
    Demo {
        /// Scenario: bytes, surrogate-pair, lone-surrogate or all
        #[arg(long, default_value_t = Scenario::Bytes)]
        scenario: Scenario,
    },
    /// Report validity and the position-wise decode trace of an input.
    #[command(
        after_help = "Examples:\n  runeshow inspect 日本語\n  runeshow inspect --hex '\\xed\\xa0\\xbd\\x00' --json\n  runeshow inspect --utf16 --hex 'd83d dca9 d83d'"
    )]
    Inspect {
        /// Literal text, or hex digits with --hex
        input: OsString,

        /// Treat INPUT as hex (bytes, or 4-digit code units with --utf16)
        #[arg(long)]
        hex: bool,

        /// Decode as UTF-16 code units instead of UTF-8 bytes
        #[arg(long)]
        utf16: bool,

        /// Write a JSON report instead of the trace
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,

        /// Exit with a non-zero code if the input is not well formed
        #[arg(long)]
        strict: bool,

        /// Suppress non-error output on stderr
        #[arg(long)]
        quiet: bool,
    },
    /// Print rune values as integers and U+ forms, valid or not.
    Rune {
        /// Decimal, 0x hex or U+ hex; anything that fits in 32 signed bits
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let result = match cli.command {
        None => cmd_demo(Scenario::default()),
        Some(Commands::Demo { scenario }) => cmd_demo(scenario),
        Some(Commands::Inspect {
            input,
            hex,
            utf16,
            json,
            pretty,
            strict,
            quiet,
        }) => cmd_inspect(input, hex, utf16, json, pretty, strict, quiet),
        Some(Commands::Rune { values }) => cmd_rune(&values),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }

    fn input(err: InputError, hint: &str) -> Self {
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_demo(scenario: Scenario) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runeshow_core::run_scenario(scenario, &mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write {} demonstration", scenario))?;
    Ok(())
}

fn cmd_inspect(
    input: OsString,
    hex: bool,
    utf16: bool,
    json: bool,
    pretty: bool,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = if utf16 {
        let units = if hex {
            parse_hex_units(hex_text(&input)?).map_err(|err| {
                CliError::input(err, "expected 4-digit hex code units, e.g. 'd83d dca9'")
            })?
        } else {
            input.to_string_lossy().encode_utf16().collect()
        };
        if !json {
            runeshow_core::show_units(&mut out, &units).context("failed to write trace")?;
        }
        runeshow_core::inspect_utf16(&units)
    } else {
        let bytes = if hex {
            parse_hex_bytes(hex_text(&input)?)
                .map_err(|err| CliError::input(err, "expected hex bytes, e.g. 'ed a0 bd 00'"))?
        } else {
            raw_bytes(input)
        };
        if !json {
            runeshow_core::show_string(&mut out, &bytes).context("failed to write trace")?;
        }
        runeshow_core::inspect_utf8(&bytes)
    };

    if json {
        let rendered = serialize_report(&report, pretty)?;
        writeln!(out, "{}", rendered).context("failed to write report")?;
    }
    out.flush().context("failed to flush output")?;

    if !quiet {
        eprintln!(
            "OK: {} steps, {} replacements ({})",
            report.steps.len(),
            report.replacements,
            report.encoding.as_str()
        );
    }
    if strict && !report.valid {
        return Err(CliError::new(
            format!("input is not well-formed {}", report.encoding.as_str()),
            Some(format!(
                "{} {} position(s) were replaced with U+FFFD",
                report.replacements,
                report.encoding.unit_name()
            )),
        ));
    }
    Ok(())
}

fn cmd_rune(values: &[String]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for value in values {
        let rune = parse_rune(value).map_err(|err| {
            CliError::input(err, "use decimal, 0x hex or U+ hex within 32 signed bits")
        })?;
        tracing::debug!(value = %value, rune, "parsed rune");
        writeln!(
            out,
            "Rune? {} {} (valid: {})",
            rune,
            UnicodeDisplay(rune),
            valid_rune(rune)
        )
        .context("failed to write rune")?;
    }
    Ok(())
}

fn serialize_report(report: &TextReport, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn hex_text(input: &OsString) -> Result<&str, CliError> {
    input.to_str().ok_or_else(|| {
        CliError::new(
            "hex input is not valid text",
            Some("pass hex digits such as 'ed a0 bd 00'".to_string()),
        )
    })
}

/// Raw argument bytes; on Unix this keeps invalid UTF-8 from the shell intact.
#[cfg(unix)]
fn raw_bytes(input: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    input.into_vec()
}

#[cfg(not(unix))]
fn raw_bytes(input: OsString) -> Vec<u8> {
    input.to_string_lossy().into_owned().into_bytes()
}
