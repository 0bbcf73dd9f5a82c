use std::io::Read;

use anyhow::Result;
use blackout_config::Config;
use blackout_core::{HiddenIndices, RedactionSelector, TokenDecision};

use super::make_rng;

pub fn handle(
    config: &Config,
    title: String,
    seed: Option<u64>,
    explain: bool,
    json: bool,
    plot: Option<String>,
) -> Result<()> {
    let plot = read_plot(plot, std::io::stdin())?;

    let selector = RedactionSelector::with_policy(config.redaction.clone());
    let mut rng = make_rng(seed, config);

    let output = if explain {
        format_decisions(&selector.explain(&plot, &title, &mut rng), json)?
    } else {
        format_indices(selector.select(&plot, &title, &mut rng), json)?
    };
    println!("{}", output);

    Ok(())
}

/// The plot given on the command line, or everything on `input` without the
/// trailing line break.
fn read_plot<R: Read>(plot: Option<String>, mut input: R) -> Result<String> {
    if let Some(plot) = plot {
        return Ok(plot);
    }

    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

fn format_indices(hidden: Vec<usize>, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&hidden)?)
    } else {
        Ok(HiddenIndices::new(hidden).to_string())
    }
}

fn format_decisions(decisions: &[TokenDecision], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(decisions)?);
    }

    let mut lines: Vec<String> = decisions
        .iter()
        .map(|d| {
            let mark = if d.decision.is_hidden() { "x" } else { " " };
            format!("  [{}] {:>3} {:<20} {}", mark, d.index, d.token, d.decision.as_str())
        })
        .collect();

    let hidden = decisions.iter().filter(|d| d.decision.is_hidden()).count();
    lines.push(format!("\n{} of {} words hidden", hidden, decisions.len()));
    Ok(lines.join("\n"))
}
