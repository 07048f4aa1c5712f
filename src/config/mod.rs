//! Configuration module

pub mod credentials;
pub mod settings;

pub use credentials::TmsCredentials;
pub use settings::Settings;
