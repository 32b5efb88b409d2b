//! Verdict Output
//!
//! Renders a verdict for stdout in the configured format.

use anyhow::Result;

use crate::config::OutputFormat;
use crate::validation::Verdict;

/// Render `verdict`, newline terminated.
///
/// Text output is `true` or `false`; with `explain` a rejected board adds a
/// line naming the broken rule.
pub fn render_verdict(verdict: &Verdict, format: OutputFormat, explain: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut out = format!("{}\n", verdict);
            if explain {
                if let Some(violation) = &verdict.violation {
                    out.push_str(&format!("{}\n", violation));
                }
            }
            out
        }
        OutputFormat::Json => format!("{}\n", serde_json::to_string(verdict)?),
    };
    Ok(rendered)
}
