use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Format, FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

/// Indents each event under the spans it was emitted in.
pub struct PrettyFormatter {
    inner: Format,
}

impl PrettyFormatter {
    pub fn new(ansi: bool) -> Self {
        Self {
            inner: fmt::format()
                .with_ansi(ansi)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_level(true)
                .with_source_location(false),
        }
    }
}

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let depth = ctx.event_scope().map(|scope| scope.count()).unwrap_or(0);

        for _ in 1..depth {
            write!(writer, "  ")?;
        }
        if depth > 0 {
            write!(writer, "└─ ")?;
        }

        self.inner.format_event(ctx, writer, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .event_format(PrettyFormatter::new(false))
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_top_level_event_is_not_indented() {
        let output = capture(|| tracing::info!("User added"));

        assert!(!output.starts_with(' '));
        assert!(!output.contains("└─"));
        assert!(output.contains("INFO"));
        assert!(output.contains("User added"));
    }

    #[test]
    fn test_nested_event_is_indented_by_depth() {
        let output = capture(|| {
            let outer = tracing::info_span!("outer");
            let _outer = outer.enter();
            let inner = tracing::info_span!("inner");
            let _inner = inner.enter();
            tracing::warn!("deep");
        });

        assert!(output.starts_with("  └─ "));
        assert!(output.contains("deep"));
    }
}
