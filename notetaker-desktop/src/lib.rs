//! Notetaker desktop shell: settings, logging and the iced front end over
//! [`notetaker_core`].

pub mod app;
pub mod logging;
pub mod note_card;
pub mod popup;
pub mod settings;
pub mod toolbar;

// Re-export core library
pub use notetaker_core::*;

use app::NotetakerApp;
use iced::Theme;

/// Opens the configured store and runs the application until the window closes.
///
/// If the store cannot be opened the session falls back to an in-memory
/// store and the failure is shown as the first feedback message.
///
/// # Errors
///
/// Returns an error if neither the configured nor the in-memory store can be
/// opened, or if iced fails to start.
pub fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    if !settings::settings_file_path().exists() {
        if let Err(e) = settings::save_settings(&settings) {
            log::warn!("{e}");
        }
    }

    let store_path = settings.resolved_store_path();
    log::info!("opening notes store at {}", store_path.display());

    let (store, startup_error) = match open_store(&store_path) {
        Ok(store) => (store, None),
        Err(e) => {
            log::error!("could not open {}: {e}", store_path.display());
            (SqliteStore::in_memory()?, Some(e))
        }
    };

    iced::application(
        "Notetaker",
        NotetakerApp::<SqliteStore>::update,
        NotetakerApp::<SqliteStore>::view,
    )
    .theme(|_| Theme::Light)
    .window_size((960.0, 760.0))
    .run_with(move || NotetakerApp::new(Notebook::load(store), startup_error))?;

    Ok(())
}

fn open_store(path: &std::path::Path) -> Result<SqliteStore> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    SqliteStore::open_or_create(path)
}
