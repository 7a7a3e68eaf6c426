//! `unidoctor apply-plan` -- push the recommended channel/width changes.
//!
//! Only channel and width go through the device manager; power modes are
//! left for the UI since the right value depends on per-model ranges.

use dialoguer::Confirm;

use unidoctor_core::{ChannelPlanEntry, RfAnalyzer, RuleSet};

use crate::cli::{ApplyPlanArgs, GlobalOpts};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: &ApplyPlanArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (client, config) = util::build_client(global)?;
    let snapshot = util::fetch_snapshot(&client, &config, global.quiet).await?;

    let (_, plan) = RfAnalyzer::new(RuleSet::default()).analyze(&snapshot);

    let changes: Vec<&ChannelPlanEntry> = plan
        .iter()
        .filter(|entry| {
            entry.current_channel != Some(entry.recommended_channel)
                || entry.current_width != entry.recommended_width
        })
        .collect();

    if changes.is_empty() {
        output::print_output(
            "All radios already match the recommended plan.",
            global.quiet,
        );
        return Ok(());
    }

    let mut summary = String::from("Changes to apply:\n");
    for entry in &changes {
        summary.push_str(&format!(
            "  {} ({}): channel {} -> {}, width {} -> {}\n",
            entry.ap_name,
            entry.band,
            entry
                .current_channel
                .map_or_else(|| "?".to_owned(), |ch| ch.to_string()),
            entry.recommended_channel,
            entry.current_width,
            entry.recommended_width,
        ));
    }
    output::print_output(&summary, false);

    if args.dry_run {
        output::print_output("Dry run -- no changes applied.", global.quiet);
        return Ok(());
    }

    if !global.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Apply these {} change(s)?", changes.len()))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(CliError::Cancelled);
        }
    }

    // Re-authenticate: the snapshot fetch logged the session out.
    let password = config.controller.secret_password()?;
    client.login(&config.controller.username, &password).await?;

    for entry in &changes {
        client
            .set_radio_channel(
                entry.ap_mac.as_str(),
                entry.band.radio_code(),
                entry.recommended_channel,
                entry.recommended_width.mhz(),
            )
            .await?;
        output::print_output(
            &format!("  applied: {} ({})", entry.ap_name, entry.band),
            global.quiet,
        );
    }
    let _ = client.logout().await;

    output::print_output(
        "Done. APs may take 30-60s to re-provision with the new radio settings.",
        global.quiet,
    );
    Ok(())
}
