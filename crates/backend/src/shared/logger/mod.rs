use contracts::shared::logger::DiagnosticEntry;
use std::sync::Mutex;

/// Приемник некритичных диагностических сообщений.
///
/// Injected into the analyzer instead of writing to a global stream.
pub trait Diagnostics: Send + Sync {
    fn log(&self, category: &str, message: &str);
}

/// Пишет диагностику в tracing
///
/// # Примеры
/// ```ignore
/// let logger = TracingLogger::new("d402");
/// logger.log("options", "Не удалось загрузить обязательные функции из options");
/// ```
#[derive(Debug, Clone)]
pub struct TracingLogger {
    source: &'static str,
}

impl TracingLogger {
    pub fn new(source: &'static str) -> Self {
        Self { source }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("server")
    }
}

impl Diagnostics for TracingLogger {
    fn log(&self, category: &str, message: &str) {
        tracing::warn!(source = self.source, category, "{}", message);
    }
}

/// Собирает диагностику для ответа API и дублирует ее в tracing
#[derive(Debug, Default)]
pub struct CollectingLogger {
    inner: TracingLogger,
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl CollectingLogger {
    pub fn new(source: &'static str) -> Self {
        Self {
            inner: TracingLogger::new(source),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn into_entries(self) -> Vec<DiagnosticEntry> {
        match self.entries.into_inner() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Diagnostics for CollectingLogger {
    fn log(&self, category: &str, message: &str) {
        self.inner.log(category, message);
        let entry = DiagnosticEntry::new(category, message);
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_logger_keeps_order() {
        let logger = CollectingLogger::new("test");
        logger.log("options", "first");
        logger.log("catalog", "second");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DiagnosticEntry::new("options", "first"));
        assert_eq!(entries[1].category, "catalog");
        assert_eq!(logger.into_entries().len(), 2);
    }
}
