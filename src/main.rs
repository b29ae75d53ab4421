mod app;

use env_logger::Env;

fn main() -> anyhow::Result<()> {
    // Report goes to stdout; warnings and notices go to stderr via the logger.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    app::run()
}
