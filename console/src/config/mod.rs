mod console_config;

pub use console_config::get_config_manager;
