use crate::core::render::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "neis-meal")]
#[command(about = "Find a school through the NEIS open API and show its meal for a date")]
pub struct CliConfig {
    /// NEIS open API key
    #[arg(long, env = "NEIS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the NEIS hub (default: https://open.neis.go.kr/hub)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List education office codes
    Offices,

    /// Search schools by name within an education office
    Search {
        /// Education office code, e.g. B10
        #[arg(short, long)]
        office: Option<String>,

        /// School name (partial match)
        #[arg(short, long)]
        name: String,

        /// Output format: text, json or csv
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show the meal of one school for a date
    Meal {
        /// Education office code, e.g. B10
        #[arg(short, long)]
        office: Option<String>,

        /// School code (SD_SCHUL_CODE)
        #[arg(short, long)]
        school: String,

        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Show every meal of the day instead of the first one
        #[arg(long)]
        all: bool,
    },

    /// Search, pick a school and a date step by step
    Interactive,
}
