use clap::Parser;
use max_daily_profit::cli::{init_tracing, run, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Full detail goes to the log only
            tracing::error!(error = ?e, "request failed");
            eprintln!("Error occurred. Refer to the log for more details.");
            ExitCode::FAILURE
        }
    }
}
