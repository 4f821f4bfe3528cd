//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running `quire` with no subcommand behaves like `quire new`, so the
/// scaffold arguments are flattened in at the top level as well.
#[derive(Debug, Parser)]
#[command(
    name    = "quire",
    bin_name = "quire",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a TISE-ITB Quarto dissertation project",
    long_about = "Quire writes the directory tree and template files of a TISE-ITB \
                  Quarto dissertation project. Files that already exist are never \
                  overwritten, so it is safe to run again.",
    after_help = "EXAMPLES:\n\
        \x20 quire                      # scaffold into ./tise-itb-dissertation-quarto\n\
        \x20 quire my-thesis            # scaffold into ./my-thesis\n\
        \x20 quire new my-thesis --dry-run\n\
        \x20 quire list --format csv\n\
        \x20 quire completions bash > /usr/share/bash-completion/completions/quire",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Scaffold arguments used when no subcommand is given.
    #[command(flatten)]
    pub scaffold: NewArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, falling back to `new` with the top-level args.
    pub fn into_parts(self) -> (GlobalArgs, Commands) {
        let command = self.command.unwrap_or(Commands::New(self.scaffold));
        (self.global, command)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the dissertation project (the default).
    #[command(
        visible_alias = "n",
        about = "Scaffold the project, skipping files that already exist",
        after_help = "EXAMPLES:\n\
            \x20 quire new\n\
            \x20 quire new ../thesis\n\
            \x20 QUIRE_BASE_DIR=thesis quire new --dry-run"
    )]
    New(NewArgs),

    /// List the files the scaffold contains.
    #[command(
        visible_alias = "ls",
        about = "List scaffold files",
        after_help = "EXAMPLES:\n\
            \x20 quire list\n\
            \x20 quire list --format json"
    )]
    List(ListArgs),

    /// Initialise a Quire configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 quire init           # user config directory\n\
            \x20 quire init --local   # .quire.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 quire completions bash > ~/.local/share/bash-completion/completions/quire\n\
            \x20 quire completions zsh  > ~/.zfunc/_quire\n\
            \x20 quire completions fish > ~/.config/fish/completions/quire.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Quire configuration.
    #[command(
        about = "Configuration management",
        after_help = "EXAMPLES:\n\
            \x20 quire config get defaults.base_dir\n\
            \x20 quire config set defaults.base_dir my-thesis\n\
            \x20 quire config list"
    )]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `quire new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Directory to scaffold into. Created (with its parents) if missing.
    #[arg(
        value_name = "BASE_DIR",
        env = "QUIRE_BASE_DIR",
        help = "Target directory [default: from config, else tise-itb-dissertation-quarto]"
    )]
    pub base_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `quire list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `quire init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.quire.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `quire completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `quire config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.base_dir`.
        key: String,
    },
    /// Set a configuration key to a value and save it.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
