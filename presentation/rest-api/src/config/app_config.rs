use super::{
    cors_config, llm_config::LlmConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub llm: LlmConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            llm: LlmConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
