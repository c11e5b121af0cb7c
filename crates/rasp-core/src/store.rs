use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;

use crate::status::{DeviceStatus, StatusReport};

/// Shared handle to the last-known device status.
///
/// Clones share one record. Writes replace the whole record under a single
/// lock, so readers see either the previous report or the new one, never a
/// mix of both.
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    inner: Arc<RwLock<DeviceStatus>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the record with `report`, stamped with the current time.
    /// Returns the stored value.
    pub fn set(&self, report: StatusReport) -> DeviceStatus {
        let status = DeviceStatus::from_report(report, Utc::now());
        // The record is always written whole, so a poisoned lock still holds
        // a consistent value.
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = status.clone();
        status
    }

    pub fn get(&self) -> DeviceStatus {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(cpu: &str) -> StatusReport {
        StatusReport {
            cpu: cpu.to_string(),
            disk: "5%".to_string(),
            memory: "60%".to_string(),
            boot_time: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn get_returns_zero_value_before_first_set() {
        let store = StatusStore::new();
        assert_eq!(store.get(), DeviceStatus::default());
    }

    #[test]
    fn set_overwrites_and_stamps_time() {
        let store = StatusStore::new();
        let before = Utc::now();
        store.set(report("10%"));
        let after = Utc::now();

        let status = store.get();
        assert_eq!(status.cpu, "10%");
        assert_eq!(status.boot_time, "2024-01-01");
        let ts = status.timestamp.expect("timestamp set");
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn last_write_wins() {
        let store = StatusStore::new();
        store.set(report("10%"));
        store.set(report("99%"));
        assert_eq!(store.get().cpu, "99%");
    }

    #[test]
    fn clones_share_one_record() {
        let store = StatusStore::new();
        let other = store.clone();
        other.set(report("42%"));
        assert_eq!(store.get().cpu, "42%");
    }

    #[test]
    fn repeated_reports_are_idempotent_apart_from_timestamp() {
        let store = StatusStore::new();
        let mut first = store.set(report("10%"));
        let mut second = store.set(report("10%"));
        first.timestamp = None;
        second.timestamp = None;
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_writers_never_tear_a_record() {
        let store = StatusStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let tag = format!("{i}");
                    for _ in 0..200 {
                        store.set(StatusReport {
                            cpu: tag.clone(),
                            disk: tag.clone(),
                            memory: tag.clone(),
                            boot_time: tag.clone(),
                        });
                        let seen = store.get();
                        assert_eq!(seen.cpu, seen.disk);
                        assert_eq!(seen.disk, seen.memory);
                        assert_eq!(seen.memory, seen.boot_time);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
