//! Merges the course catalog with the professor ratings dataset and writes
//! the merged professors document.
//!
//! ```text
//! merge --classes data/raw/classes.json --ratings data/raw/professors.json \
//!       --output data/processed/merged_professors.json
//! ```

use clap::Parser;
use common::store::{self, MergePaths};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "merge", about = "Merge course listings with professor ratings")]
struct Args {
    /// Course catalog document.
    #[arg(long, env = "MERGE_CLASSES", default_value = "data/raw/classes.json")]
    classes: PathBuf,

    /// Professor ratings document.
    #[arg(long, env = "MERGE_RATINGS", default_value = "data/raw/professors.json")]
    ratings: PathBuf,

    /// Where to write the merged professors.
    #[arg(long, env = "MERGE_OUTPUT", default_value = "data/processed/merged_professors.json")]
    output: PathBuf,
}

impl From<Args> for MergePaths {
    fn from(args: Args) -> Self {
        MergePaths {
            classes: args.classes,
            ratings: args.ratings,
            output: args.output,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let paths = MergePaths::from(Args::parse());

    match store::run_merge(&paths) {
        Ok(summary) => {
            info!(
                "{} course entries: {} matched, {} unmatched",
                summary.entries, summary.matched_entries, summary.unmatched_entries
            );
            if summary.case_collisions > 0 {
                info!(
                    "{} professors differ from another only by letter case",
                    summary.case_collisions
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
