//! Report rendering: severity-grouped findings and the channel plan table.
//!
//! Table output uses `tabled`; JSON serializes the report via serde.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use unidoctor_core::model::{AccessPoint, Band, ChannelPlanEntry, Finding, RadioState, Severity};
use unidoctor_core::DiagnosticReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

const SEVERITY_ORDER: [Severity; 4] = [
    Severity::Critical,
    Severity::Warning,
    Severity::Info,
    Severity::Good,
];

fn severity_heading(severity: Severity) -> String {
    match severity {
        Severity::Critical => format!("{}", "CRITICAL".red().bold()),
        Severity::Warning => format!("{}", "WARNING".yellow().bold()),
        Severity::Info => format!("{}", "INFO".blue().bold()),
        Severity::Good => format!("{}", "GOOD".green().bold()),
    }
}

/// Print the rendered output, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

pub fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}

// ── Full report ─────────────────────────────────────────────────────

pub fn render_report(report: &DiagnosticReport, format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return render_json(report);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "unidoctor report -- modules: {}\n",
        report.modules_run.join(", ")
    ));

    // Summary line per severity.
    for severity in SEVERITY_ORDER {
        let count = report.count(severity);
        if count > 0 {
            out.push_str(&format!("  {}: {count}\n", severity_heading(severity)));
        }
    }

    // Findings grouped by severity, generation order within each group.
    for severity in SEVERITY_ORDER {
        let group: Vec<&Finding> = report.with_severity(severity).collect();
        if group.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("==== {} ====\n", severity_heading(severity)));
        for finding in group {
            out.push_str(&render_finding(finding));
        }
    }

    if !report.channel_plan.is_empty() {
        out.push('\n');
        out.push_str(&render_plan_table(&report.channel_plan));
    }

    if report.healthy() {
        out.push_str(&format!(
            "\n{}\n",
            "Nothing needs attention.".green().bold()
        ));
    }

    Ok(out)
}

fn render_finding(finding: &Finding) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n  {} {}\n", "*".bold(), finding.title.bold()));
    out.push_str(&format!("    {}\n", finding.module.dimmed()));
    if !finding.detail.is_empty() {
        for line in finding.detail.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    if !finding.recommendation.is_empty() {
        out.push_str(&format!("    -> {}\n", finding.recommendation.bold()));
    }
    if let Some(ref ui_path) = finding.ui_path {
        out.push_str(&format!("    {}\n", ui_path.dimmed()));
    }
    out
}

// ── Channel plan ────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

fn arrow(current: &str, recommended: &str) -> String {
    if current == recommended {
        current.to_owned()
    } else {
        format!("{current} -> {recommended}")
    }
}

fn plan_row(entry: &ChannelPlanEntry) -> PlanRow {
    let current_channel = entry
        .current_channel
        .map_or_else(|| "?".to_owned(), |ch| ch.to_string());
    PlanRow {
        ap: entry.ap_name.clone(),
        band: entry.band.to_string(),
        channel: arrow(&current_channel, &entry.recommended_channel.to_string()),
        width: arrow(
            &entry.current_width.to_string(),
            &entry.recommended_width.to_string(),
        ),
        power: arrow(
            &entry.current_power.to_string(),
            &entry.recommended_power.to_string(),
        ),
        reason: entry.reason.clone(),
    }
}

pub fn render_plan_table(plan: &[ChannelPlanEntry]) -> String {
    let rows: Vec<PlanRow> = plan.iter().map(plan_row).collect();
    let mut out = String::from("Recommended channel plan (current -> recommended):\n");
    out.push_str(
        &Table::new(rows)
            .with(Style::rounded())
            .to_string(),
    );
    out
}

// ── AP table ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ApRow {
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Util %")]
    utilization: String,
    #[tabled(rename = "Noise dBm")]
    noise: String,
    #[tabled(rename = "Sat")]
    satisfaction: String,
}

fn ap_row(ap: &AccessPoint, radio: &RadioState) -> ApRow {
    ApRow {
        ap: ap.display_name().to_owned(),
        band: radio.band.to_string(),
        channel: radio
            .channel
            .map_or_else(|| "?".to_owned(), |ch| ch.to_string()),
        width: radio.width.to_string(),
        power: radio.tx_power.to_string(),
        utilization: radio.utilization_pct.to_string(),
        noise: radio.noise_floor_dbm.to_string(),
        satisfaction: radio.satisfaction.to_string(),
    }
}

pub fn render_ap_table(aps: &[&AccessPoint]) -> String {
    let rows: Vec<ApRow> = aps
        .iter()
        .flat_map(|ap| {
            [Band::Ghz2_4, Band::Ghz5]
                .into_iter()
                .filter_map(|band| ap.radio(band).map(|radio| ap_row(ap, radio)))
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
