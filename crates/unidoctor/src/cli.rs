//! Clap derive structures for the `unidoctor` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unidoctor -- opinionated UniFi network diagnostics
#[derive(Debug, Parser)]
#[command(
    name = "unidoctor",
    version,
    about = "Diagnose UniFi WiFi problems and plan channels from the command line",
    long_about = "Connects to a UniFi controller, takes one snapshot of the network's \n\
        RF state, and produces severity-ranked findings plus a concrete \n\
        per-AP channel/width/power plan.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller URL (overrides the config file)
    #[arg(long, short = 'c', env = "UNIFI_HOST", global = true)]
    pub controller: Option<String>,

    /// Site name
    #[arg(long, short = 's', env = "UNIFI_SITE", global = true)]
    pub site: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "UNIFI_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "UNIFI_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (default)
    Table,
    /// Pretty-printed JSON
    Json,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// First-run setup: controller credentials and the topology interview
    Setup,

    /// Run a diagnostic scan (all modules or a selection)
    Scan(ScanArgs),

    /// List APs with per-band channel, width, power, and utilization
    Aps,

    /// Show the current vs recommended channel plan
    #[command(alias = "plan")]
    Channels,

    /// Apply the recommended channel/width changes via the controller
    #[command(name = "apply-plan")]
    ApplyPlan(ApplyPlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Run only these modules (rf, roaming, throughput, settings, streaming)
    #[arg(long, short = 'm', value_delimiter = ',')]
    pub module: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ApplyPlanArgs {
    /// Show the changes without applying them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
