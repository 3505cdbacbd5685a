use clap::Parser;
use tracing::info;
use vitahud::sim::{SimClocks, SimKernel};
use vitahud::{Args, Overlay, display};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create the simulated host
    info!("=== Creating Overlay ===");
    let kernel = SimKernel::new(args.to_sim_config());
    let clocks = SimClocks::new();
    let mut overlay = Overlay::new(
        kernel,
        clocks.overclock(),
        clocks.profiles(),
        args.to_overlay_config(),
    );
    if let Err(e) = overlay.init() {
        eprintln!("Failed to initialize overlay: {}", e);
        std::process::exit(1);
    }

    // Run with display
    info!("=== Starting Preview ===");
    info!("Framebuffer: {}x{}", args.width, args.height);
    info!("Select: Backspace, D-pad: arrows, Cross: X, L trigger: Q, screenshot: P");

    if let Err(e) = display::run(overlay, args.width, args.height) {
        eprintln!("Preview failed: {}", e);
        std::process::exit(1);
    }
}
