//! `unidoctor aps` -- list APs with their per-band radio state.

use crate::cli::{GlobalOpts, OutputFormat};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let (client, config) = util::build_client(global)?;
    let snapshot = util::fetch_snapshot(&client, &config, global.quiet).await?;

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(&snapshot.access_points)?,
        OutputFormat::Table => output::render_ap_table(&snapshot.ordered_aps()),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
