use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use runeshow_core::input::{parse_hex_bytes, parse_hex_units};
use runeshow_core::{Scenario, TextReport, inspect_utf8, inspect_utf16, run_scenario};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.join("input.hex").exists() {
            regenerate_report(&path, false)?;
        } else if path.join("input.utf16.hex").exists() {
            regenerate_report(&path, true)?;
        } else if path.join("scenario.txt").exists() {
            regenerate_output(&path)?;
        }
    }

    Ok(())
}

fn regenerate_report(dir: &Path, utf16: bool) -> Result<(), String> {
    let input = dir.join(if utf16 { "input.utf16.hex" } else { "input.hex" });
    let hex = read(&input)?;
    let report: TextReport = if utf16 {
        let units = parse_hex_units(&hex)
            .map_err(|err| format!("bad input {}: {}", input.display(), err))?;
        inspect_utf16(&units)
    } else {
        let bytes = parse_hex_bytes(&hex)
            .map_err(|err| format!("bad input {}: {}", input.display(), err))?;
        inspect_utf8(&bytes)
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    write(&dir.join("expected_report.json"), json.as_bytes())
}

fn regenerate_output(dir: &Path) -> Result<(), String> {
    let name = read(&dir.join("scenario.txt"))?;
    let scenario: Scenario = name.trim().parse().map_err(|err| format!("{}", err))?;
    let mut out = Vec::new();
    run_scenario(scenario, &mut out).map_err(|err| format!("demo failed: {}", err))?;
    write(&dir.join("expected_output.txt"), &out)
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read {}: {}", path.display(), err))
}

fn write(path: &Path, contents: &[u8]) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
