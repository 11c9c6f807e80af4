use std::io::Read;

use anyhow::Context;
use fsm::Ndfsm;

pub fn to_file_or_stdout(maybe_file_name: Option<&String>, output: &str) -> anyhow::Result<()> {
    if let Some(file_name) = maybe_file_name {
        tracing::debug!("Output file name specified: {:?}", file_name);
        std::fs::write(file_name, output)
            .with_context(|| format!("Unable to write file {file_name}"))?;
    } else {
        print!("{output}");
    }
    Ok(())
}

pub fn from_file_or_stdin(maybe_file_name: Option<&String>) -> anyhow::Result<String> {
    match maybe_file_name {
        Some(f) => {
            tracing::debug!("Input file name specified: {:?}", f);
            std::fs::read_to_string(f).with_context(|| format!("Unable to read file {f}"))
        }
        None => {
            tracing::debug!("No input files specified, using stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Error when reading from stdin")?;
            Ok(buf)
        }
    }
}

/// Parses every non-empty line that is not a `#` comment as an encoded machine.
pub fn ndfsms(maybe_file_name: Option<&String>) -> anyhow::Result<Vec<(String, Ndfsm)>> {
    let input = from_file_or_stdin(maybe_file_name)?;
    let mut machines = vec![];
    for (number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let ndfsm = Ndfsm::try_from(line)
            .with_context(|| format!("Could not parse encoding in line {}", number + 1))?;
        tracing::debug!("Parsed NDFSM with {} states", ndfsm.size());
        machines.push((line.to_string(), ndfsm));
    }
    tracing::info!("Parsed {} NDFSM encodings", machines.len());
    Ok(machines)
}
