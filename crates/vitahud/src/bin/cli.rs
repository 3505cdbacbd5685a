use clap::Parser;
use tracing::info;
use vitahud::sim::{SimClocks, SimKernel};
use vitahud::surface::Surface;
use vitahud::{Args, FrameBuf, MemoryPool, Overlay, Rgba, capture, display};

/// Simulated time per frame (60 Hz)
const FRAME_US: u64 = 16_667;

/// Frames between telemetry log lines
const LOG_INTERVAL: u32 = 60;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
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
        std::process::exit(2);
    }

    let (width, height) = (args.width, args.height);
    let mut pixels = vec![Rgba::BLACK; width as usize * height as usize];

    info!("=== Running Overlay (Headless) ===");
    info!("Framebuffer: {}x{}, frames: {}", width, height, args.frames);
    for frame in 0..args.frames {
        overlay.kernel_mut().advance(FRAME_US);

        let mut scene = Surface::new(&mut pixels, width as usize, height as usize, width as usize);
        display::draw_scene(&mut scene, frame as u64);

        let fb = FrameBuf::from_pixels(&mut pixels, width, height, width);
        // SAFETY: `pixels` outlives the loop and is only touched between
        // overlay calls.
        unsafe { overlay.set_framebuffer(fb) };
        overlay.frame(args.buttons_at(frame));

        if (frame + 1) % LOG_INTERVAL == 0 {
            let perf = overlay.perf();
            let main = perf.memory().pool(MemoryPool::Main);
            info!(
                "frame {:>5}: mode {:?}, fps {}, loads {:?}, peak {}%, battery {}%, main {}/{} KiB",
                frame + 1,
                overlay.mode(),
                perf.fps(),
                perf.loads(),
                perf.peak(),
                perf.battery().percent(),
                main.free / 1024,
                main.total / 1024
            );
        }
    }

    // Log final state
    info!("=== Run Complete ===");
    info!("Mode: {:?}, menu: {:?}", overlay.mode(), overlay.menu());
    overlay.deinit();

    let mut exit_code = 0;
    if let Some(path) = &args.screenshot {
        let surface = Surface::new(&mut pixels, width as usize, height as usize, width as usize);
        if let Err(e) = capture::write_png(path, &surface) {
            eprintln!("Failed to write screenshot: {}", e);
            exit_code = 1;
        }
    }

    std::process::exit(exit_code);
}
