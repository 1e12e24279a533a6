use tactics_board::Layout;

fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG controls verbosity
    env_logger::init();

    // Optional first argument: a JSON layout file
    let layout = match std::env::args().nth(1) {
        Some(path) => Layout::from_file(&path).unwrap_or_else(|err| {
            log::error!("could not load layout {path}: {err}; using the default layout");
            Layout::default()
        }),
        None => Layout::default(),
    };

    tactics_board::run_app(layout)
}
