// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NotificationHost, NotificationPayload, NotifyError, Permission};
use bincal_domain::{CollectionRule, CustomAlert, NotificationPreferences, sanitize_time};
use bincal_persistence::{KeyValueStore, MemoryStore, PersistenceError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::PrimitiveDateTime;
use time::macros::datetime;

/// Monday morning; the first Tuesday collection is reminded at 20:00 today.
pub const NOW: PrimitiveDateTime = datetime!(2024 - 03 - 11 09:00);

/// A host that records every delivered payload.
pub struct RecordingHost {
    supported: bool,
    permission: Mutex<Permission>,
    answer: Permission,
    prompt_delay: Duration,
    requests: AtomicUsize,
    delivered: Mutex<Vec<NotificationPayload>>,
}

impl RecordingHost {
    pub fn granted() -> Self {
        Self::with_permission(Permission::Granted, Permission::Granted)
    }

    /// `permission` is the current state, `answer` what a prompt resolves to.
    pub fn with_permission(permission: Permission, answer: Permission) -> Self {
        Self {
            supported: true,
            permission: Mutex::new(permission),
            answer,
            prompt_delay: Duration::ZERO,
            requests: AtomicUsize::new(0),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::granted()
        }
    }

    /// Makes every permission prompt take `delay` to be answered.
    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = delay;
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn delivered_tags(&self) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .map(|payload| payload.tag.clone())
            .collect()
    }

    pub fn delivered(&self) -> Vec<NotificationPayload> {
        self.delivered.lock().unwrap().clone()
    }
}

impl NotificationHost for RecordingHost {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Permission {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.prompt_delay).await;
        *self.permission.lock().unwrap() = self.answer;
        self.answer
    }

    fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifyError> {
        self.delivered.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// A memory store whose writes fail while `fail_writes` is set.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> (Self, Arc<AtomicBool>) {
        let fail_writes: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let store: Self = Self {
            inner,
            fail_writes: Arc::clone(&fail_writes),
        };
        (store, fail_writes)
    }
}

impl KeyValueStore for FlakyStore {
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::QueryFailed(String::from("disk full")));
        }
        self.inner.write(key, value)
    }
}

/// Reads virtual time, so it moves forward while a test awaits.
pub fn virtual_clock() -> impl Fn() -> PrimitiveDateTime {
    let start: tokio::time::Instant = tokio::time::Instant::now();
    move || NOW + start.elapsed()
}

pub fn create_test_rules() -> Vec<CollectionRule> {
    vec![
        CollectionRule::weekly("burnable", "Burnable", &[2, 5]).unwrap(),
        CollectionRule::weekly("plastic", "Plastic", &[3]).unwrap(),
        CollectionRule::monthly("paper", "Paper", 3, &[1, 3]).unwrap(),
    ]
}

pub fn default_only() -> NotificationPreferences {
    NotificationPreferences::default()
}

pub fn custom_only(time: &str, categories: &[&str]) -> NotificationPreferences {
    NotificationPreferences {
        default_enabled: false,
        custom_alerts: vec![CustomAlert {
            id: String::from("a1"),
            time: sanitize_time(Some(time)),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
        }],
    }
}

/// Lets virtual time run forward, firing every timer due in between.
pub async fn run_for(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub const fn hours(count: u64) -> Duration {
    Duration::from_secs(count * 3600)
}
