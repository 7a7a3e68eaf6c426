//! `unidoctor scan` -- run analyzers and print the report.

use std::str::FromStr;

use unidoctor_core::{AnalysisModule, RuleSet, analysis};

use crate::cli::{GlobalOpts, ScanArgs};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: &ScanArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let modules = parse_modules(&args.module)?;

    let (client, config) = util::build_client(global)?;
    let snapshot = util::fetch_snapshot(&client, &config, global.quiet).await?;

    let report = analysis::run(&RuleSet::default(), &snapshot, &modules);
    let rendered = output::render_report(&report, global.output)?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}

fn parse_modules(names: &[String]) -> Result<Vec<AnalysisModule>, CliError> {
    if names.is_empty() {
        return Ok(AnalysisModule::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            AnalysisModule::from_str(name).map_err(|_| CliError::Validation {
                field: "--module".into(),
                reason: format!(
                    "unknown module '{name}' (expected rf, roaming, throughput, settings, \
                     or streaming)"
                ),
            })
        })
        .collect()
}
