use clap::Parser;

/// Startup configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-server", version, about = "CRUD HTTP service for recipes")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "RECIPES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8085)]
    pub port: u16,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:recipes.db")]
    pub database_url: String,

    /// Upper bound on pooled store connections
    #[arg(long, env = "RECIPES_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, env = "RECIPES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
