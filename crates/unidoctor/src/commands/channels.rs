//! `unidoctor channels` -- the channel plan on its own.

use unidoctor_core::{RfAnalyzer, RuleSet};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let (client, config) = util::build_client(global)?;
    let snapshot = util::fetch_snapshot(&client, &config, global.quiet).await?;

    let (_, plan) = RfAnalyzer::new(RuleSet::default()).analyze(&snapshot);

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(&plan)?,
        OutputFormat::Table => output::render_plan_table(&plan),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
