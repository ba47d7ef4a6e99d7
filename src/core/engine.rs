use crate::core::factory;
use crate::core::{ConfigProvider, OutputFormat, Result, Sink};

/// Renders one history snapshot per configured kind and emits each through
/// the sink, in the configured order.
pub struct HistoryEngine<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> HistoryEngine<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        let kinds = self.config.kinds();
        tracing::info!("Rendering {} history snapshot(s)", kinds.len());

        let mut rendered = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            tracing::debug!("Producing {} history", kind);
            let map = factory::exported(kind);

            let line = match self.config.format() {
                OutputFormat::Json => serde_json::to_string(&map)?,
                OutputFormat::Pretty => serde_json::to_string_pretty(&map)?,
            };

            self.sink.emit(&line)?;
            rendered.push(line);
        }

        Ok(rendered)
    }
}

/// Production sink: one snapshot per stdout line (or block, for pretty
/// output).
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, rendered: &str) -> Result<()> {
        println!("{}", rendered);
        Ok(())
    }
}
