pub mod history;
pub mod render;
pub mod session;
pub mod settings;

pub use session::Session;
pub use settings::Settings;
