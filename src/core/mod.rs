mod config;

pub use config::{AppConfig, load_dotenv, load_dotenv_from};
