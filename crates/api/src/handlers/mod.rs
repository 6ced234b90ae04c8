pub mod presets;
pub mod sessions;
pub mod settings;
pub mod uploads;
