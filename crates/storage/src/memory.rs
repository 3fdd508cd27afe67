use std::{collections::VecDeque, sync::Mutex};

use liftlevel_web_app::log;

/// Number of log entries kept.
const CAPACITY: usize = 100;

/// Log entries held in memory for the lifetime of the page, newest first.
pub struct Log {
    entries: Mutex<VecDeque<log::Entry>>,
}

impl Log {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(CAPACITY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use liftlevel_web_app::log::Repository;

    use super::*;

    #[test]
    fn test_write_entry() {
        let log = Log::new();

        assert_eq!(log.read_entries().unwrap(), VecDeque::new());

        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();

        assert_eq!(log.read_entries().unwrap(), VecDeque::from([entry("b"), entry("a")]));
    }

    #[test]
    fn test_write_entry_truncates() {
        let log = Log::default();

        for i in 0..=CAPACITY {
            log.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = log.read_entries().unwrap();
        assert_eq!(entries.len(), CAPACITY);
        assert_eq!(entries.front(), Some(&entry(&CAPACITY.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    fn entry(message: &str) -> log::Entry {
        log::Entry {
            time: "Jan 01 00:00:00".to_string(),
            level: ::log::Level::Info,
            message: message.to_string(),
        }
    }
}
