use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_DB_PATH: &str = ".cache/talent-match/talent.sqlite";

#[derive(Parser, Debug)]
#[command(
    name = "talent-match",
    version,
    about = "Benchmark-driven talent matching over an employee database"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Init(InitArgs),
    Employees(EmployeesArgs),
    Rank(RankArgs),
    Weights(WeightsArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub seed_demo: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EmployeesArgs {
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long = "benchmark", required = true)]
    pub benchmarks: Vec<String>,

    #[arg(long)]
    pub job_vacancy_id: Option<String>,

    #[arg(long, default_value = "")]
    pub role_name: String,

    #[arg(long, default_value = "")]
    pub job_level: String,

    #[arg(long, default_value_t = false)]
    pub equal_weights: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct WeightsArgs {
    #[arg(long, default_value_t = false)]
    pub equal_weights: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}
