use anyhow::Context;
use strider::{App, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Reading settings from {path}");
            Settings::load(&path).with_context(|| format!("failed to read settings from {path}"))?
        }
        None => Settings::default(),
    };

    App::new(settings)?.run()?;
    Ok(())
}
