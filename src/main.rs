use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    println!("     -----fixlog logging utility-----");
    println!("     --------------------------------");
    println!();

    ctrlc::set_handler(|| {
        println!("\nShutting down...");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(err) = fixlog::shell::run(&mut input, &mut out) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
