use once_cell::sync::OnceCell;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigError, LogFormat, LogLevel};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// `RUST_LOG` が設定されていればそれを、なければ指定レベルのフィルタを構築する。
///
/// # Errors
/// フィルタ指定を解釈できない場合は [`ConfigError::InvalidFilter`] を返す。
pub fn build_filter(level: LogLevel) -> Result<EnvFilter, ConfigError> {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.as_str().to_string());

    EnvFilter::try_new(&directive)
        .map_err(|source| ConfigError::InvalidFilter { directive, source })
}

/// Tracing サブスクライバを一度だけ初期化する。
///
/// ログは標準出力を汚さないよう標準エラーに書き出す。
///
/// # Errors
/// フィルタの解釈もしくはサブスクライバの登録に失敗した場合はエラーを返す。
pub fn init_tracing(level: LogLevel, format: LogFormat) -> Result<(), ConfigError> {
    TRACING_INIT.get_or_try_init(|| {
        let env_filter = build_filter(level)?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };
        result.map_err(|error| ConfigError::TracingInit(error.to_string()))?;

        debug!(level = level.as_str(), ?format, "tracing initialized");
        Ok::<(), ConfigError>(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_accepts_plain_levels() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(build_filter(LogLevel::Debug).is_ok());
        assert!(build_filter(LogLevel::Error).is_ok());
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing(LogLevel::Warn, LogFormat::Pretty).expect("first init");
        init_tracing(LogLevel::Trace, LogFormat::Json).expect("second init is a no-op");
    }
}
