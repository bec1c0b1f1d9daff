use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{builtin_packages, process_packages};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let packages = builtin_packages();
    tracing::debug!("Loaded {} built-in packages", packages.len());

    for report in process_packages(&packages)? {
        println!("{report}");
    }

    Ok(())
}
