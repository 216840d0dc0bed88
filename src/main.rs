mod cli;
mod config;
mod instructions;
mod layout;
mod logging;
mod runner;
mod status;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
