//! Tracing setup for hosts embedding the alias engine.

use std::path::{Path, PathBuf};

use env_flags::env_flags;
use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, prelude::*};

use crate::config::{GatewayConfig, LoggingCfg, expand_home, load_user_config};

type Filtered = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Compact,
    Pretty,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    filter: String,
    format: LogFormat,
    log_dir: Option<PathBuf>,
}

/// Default home for config and logs: `$MODEL_ALIAS_HOME`, else
/// `$HOME/.model-alias`, else `./.model-alias`.
pub fn default_home() -> PathBuf {
    env_flags! {
        /// Home directory for config.toml and logs (absolute).
        MODEL_ALIAS_HOME: &str = "";
    }
    if !(*MODEL_ALIAS_HOME).is_empty() {
        return expand_home(*MODEL_ALIAS_HOME);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".model-alias");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".model-alias")
}

/// Logging knobs taken from the environment; `None` where the variable is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvOverrides {
    filter: Option<String>,
    json: Option<bool>,
    compact: Option<bool>,
    pretty: Option<bool>,
    to_file: Option<bool>,
    log_dir: Option<String>,
}

impl EnvOverrides {
    fn from_process() -> Self {
        env_flags! {
            /// Standard tracing filter; used when TRACING_FILTER is empty.
            RUST_LOG: &str = "";
            /// Tracing filter, e.g. "info" or "model_alias=debug". Wins over RUST_LOG.
            TRACING_FILTER: &str = "";
            /// Multi-line pretty output (only when JSON and compact are off).
            TRACING_PRETTY: bool = false;
            /// Single-line compact output; the default format.
            TRACING_COMPACT: bool = true;
            /// JSON output; wins over compact and pretty.
            TRACING_JSON: bool = false;
            /// Also write a daily rolling file; off unless enabled here or in config.
            LOG_TO_FILE: bool = false;
            /// Directory for the log file; `~/` is expanded. Defaults to <home>/logs.
            LOG_DIR: &str = "";
        }
        let set = |k: &str| std::env::var_os(k).is_some();
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Self {
            filter: non_empty(*TRACING_FILTER).or_else(|| non_empty(*RUST_LOG)),
            json: set("TRACING_JSON").then_some(*TRACING_JSON),
            compact: set("TRACING_COMPACT").then_some(*TRACING_COMPACT),
            pretty: set("TRACING_PRETTY").then_some(*TRACING_PRETTY),
            to_file: set("LOG_TO_FILE").then_some(*LOG_TO_FILE),
            log_dir: non_empty(*LOG_DIR),
        }
    }
}

/// Install the global subscriber. Env vars take precedence over the
/// `[logging]` section of `<home>/config.toml`. Calling it again is a no-op.
pub fn init_tracing(home: &Path) {
    let user_cfg = load_user_config(home).ok().flatten();
    let settings = resolve_settings(home, user_cfg.as_ref(), &EnvOverrides::from_process());

    let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(settings.format, std::io::stderr, true)];

    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let mut dir_error = None;
    if let Some(dir) = settings.log_dir.as_ref() {
        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "model-alias.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                layers.push(fmt_layer(settings.format, nb, false));
            }
            Err(e) => dir_error = Some((dir.clone(), e)),
        }
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
    {
        tracing::debug!("tracing already set: {:?}", e);
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!("failed to create log dir {}: {}", dir.display(), e);
    }
}

// Precedence per knob: environment, then `[logging]`, then the built-in default.
fn resolve_settings(
    home: &Path,
    user_cfg: Option<&GatewayConfig>,
    env: &EnvOverrides,
) -> LogSettings {
    let cfg = user_cfg.and_then(|c| c.logging.as_ref());
    let from_cfg = |pick: fn(&LoggingCfg) -> Option<bool>| cfg.and_then(pick);

    let filter = env
        .filter
        .clone()
        .or_else(|| cfg.and_then(|c| c.level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let json = env.json.or(from_cfg(|c| c.json)).unwrap_or(false);
    let compact = env.compact.or(from_cfg(|c| c.compact)).unwrap_or(true);
    let pretty = env.pretty.or(from_cfg(|c| c.pretty)).unwrap_or(false);
    let to_file = env.to_file.or(from_cfg(|c| c.to_file)).unwrap_or(false);
    let dir = env
        .log_dir
        .as_deref()
        .or_else(|| cfg.and_then(|c| c.dir.as_deref()))
        .map(expand_home);

    let format = if json {
        LogFormat::Json
    } else if compact {
        LogFormat::Compact
    } else if pretty {
        LogFormat::Pretty
    } else {
        LogFormat::Full
    };
    let log_dir = to_file.then(|| dir.unwrap_or_else(|| home.join("logs")));

    LogSettings {
        filter,
        format,
        log_dir,
    }
}

fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer);
    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Full => layer.boxed(),
    }
}
