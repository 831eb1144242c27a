#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> Result<(), Box<dyn std::error::Error>> {
    notetaker_desktop_lib::logging::init_logging();
    notetaker_desktop_lib::run()
}
