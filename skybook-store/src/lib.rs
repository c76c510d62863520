pub mod app_config;
pub mod credential_file;

pub use app_config::Config;
pub use credential_file::FileCredentialStore;
