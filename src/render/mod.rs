//! Plain-text report rendering
//!
//! Thin presentation layer over the structured report; numeric rounding
//! happens here, never in the models.

use crate::models::{ChannelReport, TimeframeReport};

const WIDTH: usize = 66;

/// Render the full multi-time-frame report as a boxed text block
pub fn render_report(report: &ChannelReport) -> String {
    let mut out = String::new();
    push_rule(&mut out, '╔', '╗');
    push_line(&mut out, &format!("{} multi-time-frame channel report", report.symbol));
    push_line(
        &mut out,
        &format!("generated {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
    );
    push_line(
        &mut out,
        &format!("strategies: {}", report.strategies_used.join(" | ")),
    );
    push_rule(&mut out, '╠', '╣');

    for tf in &report.timeframes {
        push_line(&mut out, "");
        match tf {
            TimeframeReport::Failed(f) => {
                push_line(&mut out, &format!("{} ({})", f.name, f.label));
                push_line(&mut out, &format!("  error: {}", f.error));
            }
            TimeframeReport::Analyzed(a) => {
                push_line(
                    &mut out,
                    &format!("{} ({}) - {} bars", a.name, a.label, a.bars_total),
                );
                for result in &a.strategies {
                    match result.as_reading() {
                        Some(r) => push_line(
                            &mut out,
                            &format!(
                                "  {:<17} {:<18} pos {:>3.0}%  {:.0}/{:.0}",
                                r.strategy_name,
                                r.channel_type.label(),
                                r.position_pct,
                                r.upper_band,
                                r.lower_band,
                            ),
                        ),
                        None => push_line(
                            &mut out,
                            &format!("  {:<17} error: {}", result.strategy_name(), error_of(result)),
                        ),
                    }
                }
                push_line(&mut out, &format!("  -- consensus: {}", a.verdict.label));
            }
        }
    }

    push_line(&mut out, "");
    push_rule(&mut out, '╠', '╣');
    push_line(&mut out, "overall");
    push_line(&mut out, &format!("  {}", report.summary.conclusion));
    for detail in &report.summary.details {
        push_line(&mut out, &format!("  * {detail}"));
    }
    for warning in &report.summary.warnings {
        push_line(&mut out, &format!("  ! {warning}"));
    }
    push_rule(&mut out, '╚', '╝');
    out
}

fn error_of(result: &crate::models::ChannelResult) -> &str {
    match result {
        crate::models::ChannelResult::Error(e) => &e.error,
        crate::models::ChannelResult::Reading(_) => "",
    }
}

fn push_line(out: &mut String, text: &str) {
    let mut line = text.to_string();
    if line.chars().count() > WIDTH - 4 {
        line = line.chars().take(WIDTH - 4).collect();
    }
    let pad = WIDTH - 4 - line.chars().count();
    out.push_str(&format!("║ {}{} ║\n", line, " ".repeat(pad)));
}

fn push_rule(out: &mut String, left: char, right: char) {
    out.push(left);
    out.push_str(&"═".repeat(WIDTH - 2));
    out.push(right);
    out.push('\n');
}
