/// Log sink routing.
///
/// The core only emits `tracing` events. This module decides where they go:
/// every sink is a row in a routing table pairing a target with an inclusive
/// [`SeverityBand`], and each row becomes one `fmt` layer with its own
/// per-layer filter. All sinks share one line format:
///
/// ```text
/// <timestamp> - <target> - <LEVEL> - <message>
/// ```
use anyhow::Context;
use dirscan_core::clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
use std::fmt::{self, Write as _};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::{LookupSpan, Registry};
use tracing_subscriber::Layer;

/// Log file used when none is given on the command line.
pub const DEFAULT_LOG_FILE: &str = "directory_info.log";

/// A type-erased layer ready to be stacked on the registry.
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

// ── Severity bands ───────────────────────────────────────────────────────────

/// Event severity, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::DEBUG {
            Self::Debug
        } else {
            Self::Trace
        }
    }
}

/// Inclusive range of severities a sink accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBand {
    pub min: Severity,
    pub max: Severity,
}

impl SeverityBand {
    /// Warnings and errors.
    pub const WARNING_OR_ABOVE: Self = Self::new(Severity::Warn, Severity::Error);

    pub const fn new(min: Severity, max: Severity) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, severity: Severity) -> bool {
        self.min <= severity && severity <= self.max
    }
}

// ── Routing table ────────────────────────────────────────────────────────────

/// Where a sink writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    /// Appended to; created if missing.
    File(PathBuf),
    Stderr,
}

/// One row of the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRoute {
    pub target: SinkTarget,
    pub band: SeverityBand,
}

/// Logging settings taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Main log file.
    pub log_file: PathBuf,
    /// When set, warnings and errors go here and `log_file` keeps only the
    /// informational band.
    pub split_file: Option<PathBuf>,
    /// Include DEBUG events.
    pub verbose: bool,
    /// Echo log lines to stderr.
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            split_file: None,
            verbose: false,
            console: true,
        }
    }
}

impl LogConfig {
    /// Build the routing table for this configuration.
    pub fn routes(&self) -> Vec<SinkRoute> {
        let floor = if self.verbose {
            Severity::Debug
        } else {
            Severity::Info
        };
        let everything = SeverityBand::new(floor, Severity::Error);

        let mut routes = Vec::with_capacity(3);
        match &self.split_file {
            Some(split) => {
                routes.push(SinkRoute {
                    target: SinkTarget::File(self.log_file.clone()),
                    band: SeverityBand::new(floor, Severity::Info),
                });
                routes.push(SinkRoute {
                    target: SinkTarget::File(split.clone()),
                    band: SeverityBand::WARNING_OR_ABOVE,
                });
            }
            None => routes.push(SinkRoute {
                target: SinkTarget::File(self.log_file.clone()),
                band: everything,
            }),
        }
        if self.console {
            routes.push(SinkRoute {
                target: SinkTarget::Stderr,
                band: everything,
            });
        }
        routes
    }
}

// ── Line format ──────────────────────────────────────────────────────────────

/// `<timestamp> - <target> - <LEVEL> - <message>`, timestamps from a [`Clock`].
pub struct LineFormat<C> {
    clock: C,
}

impl<C: Clock> LineFormat<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<S, N, C> FormatEvent<S, N> for LineFormat<C>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    C: Clock,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            self.clock.now().format(TIMESTAMP_FORMAT),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ── Subscriber assembly ──────────────────────────────────────────────────────

/// One formatted layer writing to `writer`, accepting only events in `band`.
pub fn band_layer<W, C>(band: SeverityBand, writer: W, clock: C) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    C: Clock + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .event_format(LineFormat::new(clock))
        .with_filter(filter_fn(move |meta: &Metadata<'_>| {
            band.contains(Severity::from(*meta.level()))
        }))
        .boxed()
}

/// Build a subscriber with one layer per route.
///
/// Fails only if a log file cannot be opened.
pub fn build_subscriber<C>(
    routes: &[SinkRoute],
    clock: C,
) -> anyhow::Result<impl Subscriber + Send + Sync + 'static>
where
    C: Clock + Clone + 'static,
{
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(routes.len());
    for route in routes {
        let layer = match &route.target {
            SinkTarget::Stderr => band_layer(route.band, std::io::stderr, clock.clone()),
            SinkTarget::File(path) => {
                band_layer(route.band, Mutex::new(open_log_file(path)?), clock.clone())
            }
        };
        layers.push(layer);
    }
    Ok(tracing_subscriber::registry().with(layers))
}

/// Install the routing table for `config` as the global subscriber.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let subscriber = build_subscriber(&config.routes(), SystemClock)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")?;
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}
