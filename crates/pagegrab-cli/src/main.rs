mod cli;

fn main() {
    // Parse, configure logging from the flags, and run the pipeline.
    if let Err(err) = cli::run_from_args() {
        eprintln!("pagegrab error: {:#}", err);
        std::process::exit(1);
    }
}
