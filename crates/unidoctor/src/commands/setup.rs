//! `unidoctor setup` -- controller credentials plus the topology interview.
//!
//! The interview gathers what the controller cannot know: where each AP
//! physically sits and what separates AP pairs. That context is what lets
//! the analyzer escalate a channel overlap from warning to critical.

use dialoguer::{Input, Password, Select};

use unidoctor_config::{
    Config, ControllerProfile, load_config, load_topology, save_config, save_topology,
};
use unidoctor_core::model::{
    AccessPoint, BackhaulType, BarrierType, FloorLevel, Placement, Topology, TopologyLink,
};

use crate::cli::GlobalOpts;
use crate::commands::util;
use crate::error::CliError;
use crate::output;

const FLOOR_CHOICES: [(FloorLevel, &str); 4] = [
    (FloorLevel::Ground, "Ground floor"),
    (FloorLevel::Upper, "Upper floor"),
    (FloorLevel::Basement, "Basement"),
    (FloorLevel::Detached, "Detached building (outdoor run)"),
];

const BACKHAUL_CHOICES: [(BackhaulType, &str); 2] = [
    (BackhaulType::Wired, "Wired (Ethernet)"),
    (BackhaulType::WirelessMesh, "Wireless mesh"),
];

const BARRIER_CHOICES: [(BarrierType, &str); 4] = [
    (BarrierType::Wall, "Wall"),
    (BarrierType::FloorCeiling, "Floor/ceiling"),
    (BarrierType::Outdoor, "Outdoor path"),
    (BarrierType::OpenAir, "Open air"),
];

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let existing = load_config().unwrap_or_default();

    // ── Controller profile ──────────────────────────────────────────
    let host: String = Input::new()
        .with_prompt("Controller URL")
        .default(existing.controller.host.clone())
        .interact_text()?;
    let username: String = Input::new()
        .with_prompt("Username")
        .default(existing.controller.username.clone())
        .interact_text()?;
    let password: String = Password::new()
        .with_prompt("Password (leave empty to keep current)")
        .allow_empty_password(true)
        .interact()?;
    let site: String = Input::new()
        .with_prompt("Site name")
        .default(existing.controller.site.clone())
        .interact_text()?;

    let config = Config {
        controller: ControllerProfile {
            host,
            username,
            site,
            password: if password.is_empty() {
                existing.controller.password.clone()
            } else {
                Some(password)
            },
            verify_ssl: existing.controller.verify_ssl && !global.insecure,
        },
    };

    save_config(&config)?;
    output::print_output(
        &format!("Config saved to {}", unidoctor_config::config_path().display()),
        global.quiet,
    );

    // ── Discover APs for the interview ──────────────────────────────
    let (client, config) = util::build_client(global)?;
    let snapshot = match util::fetch_snapshot(&client, &config, global.quiet).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            output::print_output(
                "Config saved, but connecting failed -- fix the connection and re-run setup.",
                false,
            );
            return Err(err);
        }
    };

    let aps = snapshot.ordered_aps();
    if aps.is_empty() {
        output::print_output(
            "No APs discovered. Run setup again after adopting your APs.",
            global.quiet,
        );
        return Ok(());
    }

    let topology = run_interview(&aps)?;
    save_topology(&topology)?;
    output::print_output(
        &format!(
            "Topology saved to {}",
            unidoctor_config::topology_path().display()
        ),
        global.quiet,
    );
    Ok(())
}

/// Ask about each AP's placement, then about each AP pair.
fn run_interview(aps: &[&AccessPoint]) -> Result<Topology, CliError> {
    let existing = load_topology().unwrap_or_default();

    println!("\nFound {} access point(s). Where is each one?", aps.len());

    let mut placements = Vec::with_capacity(aps.len());
    for ap in aps {
        println!("\n{} ({})", ap.display_name(), ap.mac);

        let default_floor = existing
            .placement_for(&ap.mac)
            .map_or(0, |p| {
                FLOOR_CHOICES
                    .iter()
                    .position(|(f, _)| *f == p.floor)
                    .unwrap_or(0)
            });
        let floor_idx = Select::new()
            .with_prompt("  Floor")
            .items(&FLOOR_CHOICES.map(|(_, label)| label))
            .default(default_floor)
            .interact()?;

        let location: String = Input::new()
            .with_prompt("  Location description (e.g. 'living room ceiling')")
            .allow_empty(true)
            .default(
                existing
                    .placement_for(&ap.mac)
                    .map(|p| p.location.clone())
                    .unwrap_or_default(),
            )
            .interact_text()?;

        let backhaul_idx = Select::new()
            .with_prompt("  Backhaul")
            .items(&BACKHAUL_CHOICES.map(|(_, label)| label))
            .default(0)
            .interact()?;

        placements.push(Placement {
            mac: ap.mac.clone(),
            name: ap.display_name().to_owned(),
            floor: FLOOR_CHOICES[floor_idx].0,
            location,
            backhaul: BACKHAUL_CHOICES[backhaul_idx].0,
        });
    }

    // Pairwise distances contextualize overlap findings.
    let mut links = Vec::new();
    if aps.len() > 1 {
        println!("\nNow the distances between APs (rough feet are fine).");
        for i in 0..aps.len() {
            for j in (i + 1)..aps.len() {
                let (a, b) = (aps[i], aps[j]);
                println!("\n{} <-> {}", a.display_name(), b.display_name());

                let distance_ft: f64 = Input::new()
                    .with_prompt("  Distance (ft)")
                    .default(30.0)
                    .interact_text()?;

                let barrier_idx = Select::new()
                    .with_prompt("  Barrier")
                    .items(&BARRIER_CHOICES.map(|(_, label)| label))
                    .default(0)
                    .interact()?;

                links.push(TopologyLink {
                    ap1: a.mac.clone(),
                    ap2: b.mac.clone(),
                    distance_ft,
                    barrier: BARRIER_CHOICES[barrier_idx].0,
                });
            }
        }
    }

    Ok(Topology { placements, links })
}
