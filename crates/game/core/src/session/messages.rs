/// The message window queue.
pub trait MessageQueue {
    /// Appends one batch of lines shown together on a single page.
    ///
    /// Empty batches are ignored.
    fn post(&mut self, lines: Vec<String>);
}

/// Vector-backed queue following the legacy text buffer conventions.
///
/// The last line of every batch is terminated with a form feed so the
/// window waits for input before continuing, and `pending` is raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    pub texts: Vec<String>,
    pub pending: bool,
}

impl MessageLog {
    pub const PAGE_BREAK: char = '\u{c}';

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of page breaks queued so far.
    pub fn page_count(&self) -> usize {
        self.texts
            .iter()
            .filter(|line| line.ends_with(Self::PAGE_BREAK))
            .count()
    }
}

impl MessageQueue for MessageLog {
    fn post(&mut self, mut lines: Vec<String>) {
        let Some(last) = lines.last_mut() else {
            return;
        };
        last.push(Self::PAGE_BREAK);
        self.texts.append(&mut lines);
        self.pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ends_with_page_break() {
        let mut log = MessageLog::new();
        log.post(vec!["Alex Level 2 up!".into(), "Fire learned!".into()]);

        assert_eq!(log.texts.len(), 2);
        assert_eq!(log.texts[1], "Fire learned!\u{c}");
        assert_eq!(log.page_count(), 1);
        assert!(log.pending);
    }

    #[test]
    fn empty_batch_is_ignored() {
        let mut log = MessageLog::new();
        log.post(Vec::new());

        assert!(log.texts.is_empty());
        assert!(!log.pending);
    }
}
