use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Microservice configuration: identity plus listen address.
///
/// `HOST`/`PORT` come from the environment (defaults 0.0.0.0:8080), which is
/// the only deployment knob this variant has.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
