//! Hebrew Tag Fixer
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) for MP3 files whose Hebrew
//! ID3 text was stored in visual order, so it shows up backwards (“םולש” instead of “שלום”).
//! It finds those files, shows a before/after preview, and writes the corrected
//! title / artist / album / file name back to disk.
//!
//! # How Iced works (super simple mental model)
//! - `HebTag` = the *entire memory* of the app (all the state)
//! - `Message` = “something happened” (button clicked, typed a letter, scan finished)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Behavior
//! - "Add file(s)" loads the given `.mp3` paths; "Scan folder" walks a folder and
//!   keeps files with Hebrew in at least one field.
//! - "Convert" reverses the Hebrew runs in memory only. Nothing is written until "Save".
//! - "Save" backs the file up, writes the tags, renames it if the name changed, and
//!   restores the backup if any step fails.
//! - Every save lands in the history panel; "Undo last save" writes the old values back.
//!
//! # Architecture constraints (on purpose)
//! - UI layer calls `core::*` for scanning, tag reading and writing.
//! - Scans and saves run on a separate thread and come back as `Message::*Finished`.

mod config;
mod core;
mod gui;

use env_logger::Env;

use gui::{HebTag, update, view};

fn main() -> iced::Result {
    let (settings, problem) = config::load();

    // RUST_LOG wins over the config file.
    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_filter.as_str()))
        .init();
    config::report(&settings, problem.as_ref());

    iced::application(move || HebTag::new(settings.clone()), update, view)
        .title("Hebrew Tag Fixer")
        .run()
}
