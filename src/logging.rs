use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// stderr にログを出す。stdout は stdio トランスポートが使うので書かない。
///
/// `RUST_LOG` が設定されていればそちらを優先する。
pub fn init(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
