use vimterm::{app, cli, debug};

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();
    debug::init_log_bridge(options.log_level);

    log::info!("Starting vimterm {}", vimterm::VERSION);

    if let Err(e) = app::run(options) {
        eprintln!("vimterm: error: {e:#}");
        std::process::exit(1);
    }
}
