#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use bizdesk_business::BusinessConfig;
use bizdesk_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = BusinessConfig::init().context("invalid BIZDESK_* environment")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("bizdesk-io")
        .build()
        .context("failed to start the IO runtime")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let state = State::new(config, runtime.handle().clone());
    let app = bizdesk_ui::BizdeskApp::new(state).context("failed to build the HTTP client")?;

    eframe::run_native("Bizdesk", native_options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("eframe failed: {err}"))
}
