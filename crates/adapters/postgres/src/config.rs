//! PostgreSQL 配置模块
//!
//! 连接池参数与连接选项

use ::config::DatabaseConfig;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::time::Duration;

/// SSL 模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// 禁用 SSL
    Disable,
    /// 允许 SSL（如果服务器支持）
    #[default]
    Prefer,
    /// 要求 SSL
    Require,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        }
    }

    fn to_pg(self) -> PgSslMode {
        match self {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// PostgreSQL 配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// 主机
    pub host: String,
    /// 端口
    pub port: u16,
    /// 数据库名
    pub database: String,
    /// 用户名
    pub username: String,
    /// 密码
    pub password: Option<String>,
    /// SSL 模式
    pub ssl_mode: SslMode,
    /// 最小连接数
    pub pool_min: u32,
    /// 最大连接数
    pub pool_max: u32,
    /// 获取连接超时
    pub connect_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            username: "postgres".to_string(),
            password: None,
            ssl_mode: SslMode::default(),
            pool_min: 0,
            pool_max: 10,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(30),
            application_name: None,
        }
    }
}

impl PostgresConfig {
    /// 从组件创建配置
    pub fn from_components(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// 从应用的数据库配置创建
    pub fn from_database_config(db: &DatabaseConfig) -> Self {
        Self::from_components(&db.host, db.port, &db.name, &db.username)
            .with_password(db.password.expose_secret())
            .with_pool(0, db.max_connections)
            .with_idle_timeout(Duration::from_secs(db.max_idle_time_secs))
            .with_connect_timeout(Duration::from_secs(db.connect_timeout_secs))
    }

    /// 设置密码
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// 设置 SSL 模式
    pub fn with_ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = mode;
        self
    }

    /// 设置连接池配置
    pub fn with_pool(mut self, min: u32, max: u32) -> Self {
        self.pool_min = min;
        self.pool_max = max;
        self
    }

    /// 设置连接超时
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// 设置空闲超时
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// 设置应用名称
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 不含密码的连接 URL，用于日志输出
    pub fn connection_url(&self) -> String {
        let mut url = format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            self.username,
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        );
        if let Some(ref app_name) = self.application_name {
            url.push_str("&application_name=");
            url.push_str(app_name);
        }
        url
    }

    /// 构建 sqlx 连接选项
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .ssl_mode(self.ssl_mode.to_pg());

        if let Some(ref password) = self.password {
            options = options.password(password);
        }
        if let Some(ref app_name) = self.application_name {
            options = options.application_name(app_name);
        }
        options
    }
}
