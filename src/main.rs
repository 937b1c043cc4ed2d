use taskdesk::commands::Cli;
use taskdesk::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdesk=debug,mongodb=info"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }

    Cli::menu()
}
