use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::mailer::MailConfig;

/// Server configuration
///
/// Every entry can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/fiesta/server | database, uploads, logs |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | generated in dev | HS256 signing key (>= 32 chars) |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | MAIL_API_URL | https://api.resend.com/emails | transactional e-mail endpoint |
/// | MAIL_API_KEY | unset (mailer disabled) | bearer key |
/// | MAIL_FROM | bookings@localhost | from address |
/// | ADMIN_EMAIL | unset | copy of booking notifications |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | admin / admin | seeded back-office login |
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding database, uploads and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Transactional e-mail configuration
    pub mail: MailConfig,
    /// Seeded back-office admin login
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/fiesta/server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            mail: MailConfig::from_env(),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into()),
        }
    }

    /// Override work dir and port, useful in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads/images")
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.uploads_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_dir_layout_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);

        config.ensure_work_dir_structure().unwrap();

        assert!(config.database_dir().is_dir());
        assert!(config.uploads_dir().is_dir());
        assert!(config.logs_dir().is_dir());
    }

    #[test]
    fn overrides_replace_dir_and_port() {
        let config = Config::with_overrides("/tmp/fiesta-test", 8080);
        assert_eq!(config.work_dir, "/tmp/fiesta-test");
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.uploads_dir(), PathBuf::from("/tmp/fiesta-test/uploads/images"));
    }
}
