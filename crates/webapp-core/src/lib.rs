pub mod logging;
pub mod settings;

pub mod app;
pub mod desktop_entry;
pub mod favicon;
pub mod paths;
pub mod register;
pub mod url_model;
