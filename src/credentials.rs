//! API credential storage and the mock connection test.
//!
//! The credential pair is stored as one JSON document under
//! [`API_KEYS_STORAGE_KEY`]. Every save rewrites the whole pair.

use crate::clock::Scheduler;
use crate::consts::cli_consts::API_KEYS_STORAGE_KEY;
use crate::consts::cli_consts::credentials::{MIN_VALID_KEY_LEN, connection_test_delay};
use crate::error::ValidationError;
use crate::logging::LogLevel;
use crate::notifications::{Notification, Toasts};
use crate::storage::{KeyValueStore, StorageError};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// External AI services that accept an API key.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Service {
    #[value(name = "openai")]
    OpenAi,
    #[value(name = "elevenlabs")]
    ElevenLabs,
}

impl Service {
    pub fn label(&self) -> &'static str {
        match self {
            Service::OpenAi => "OpenAI API",
            Service::ElevenLabs => "ElevenLabs API (Optional)",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Service::OpenAi => "Interview question generation, answer analysis, and feedback",
            Service::ElevenLabs => {
                "Text-to-speech for interview questions and voice input processing"
            }
        }
    }

    pub fn key_placeholder(&self) -> &'static str {
        match self {
            Service::OpenAi => "sk-...",
            Service::ElevenLabs => "sk_...",
        }
    }
}

/// The persisted credential pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevenlabs: Option<String>,
}

impl ApiKeys {
    pub fn get(&self, service: Service) -> Option<&str> {
        match service {
            Service::OpenAi => self.openai.as_deref(),
            Service::ElevenLabs => self.elevenlabs.as_deref(),
        }
    }

    pub fn set(&mut self, service: Service, value: String) {
        match service {
            Service::OpenAi => self.openai = Some(value),
            Service::ElevenLabs => self.elevenlabs = Some(value),
        }
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Credential pair backed by a key-value store.
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: S,
    keys: ApiKeys,
}

impl<S: KeyValueStore> CredentialStore<S> {
    /// Loads the last saved pair. Unreadable or malformed data is logged and
    /// treated as absent.
    pub fn load(store: S, toasts: &mut Toasts) -> Self {
        let keys = match store.get(API_KEYS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<ApiKeys>(&raw) {
                Ok(keys) => keys,
                Err(e) => {
                    error!("Error parsing saved API keys: {}", e);
                    toasts.push(Notification::info_with_level(
                        "Saved API keys were unreadable and have been ignored",
                        LogLevel::Warn,
                    ));
                    ApiKeys::default()
                }
            },
            Ok(None) => ApiKeys::default(),
            Err(e) => {
                error!("Error reading saved API keys: {}", e);
                toasts.push(Notification::info_with_level(
                    format!("Could not read saved API keys: {e}"),
                    LogLevel::Warn,
                ));
                ApiKeys::default()
            }
        };
        Self { store, keys }
    }

    #[cfg(test)]
    pub fn keys(&self) -> &ApiKeys {
        &self.keys
    }

    pub fn get(&self, service: Service) -> Option<&str> {
        self.keys.get(service)
    }

    /// Stores `value` for `service` and persists the full pair.
    pub fn save(
        &mut self,
        service: Service,
        value: &str,
        toasts: &mut Toasts,
    ) -> Result<(), CredentialError> {
        if value.is_empty() {
            toasts.error(ValidationError::MissingKey.to_string());
            return Err(ValidationError::MissingKey.into());
        }

        let mut updated = self.keys.clone();
        updated.set(service, value.to_string());
        let json = serde_json::to_string(&updated).map_err(StorageError::from)?;
        if let Err(e) = self.store.set(API_KEYS_STORAGE_KEY, &json) {
            error!("Failed to persist {} API key: {}", service, e);
            toasts.error(format!("Failed to save {service} API key: {e}"));
            return Err(e.into());
        }

        self.keys = updated;
        info!("Saved {} API key", service);
        toasts.success(format!("{service} API key saved successfully!"));
        Ok(())
    }

    /// Mock validity check: the stored key must be longer than the minimum.
    pub fn is_valid(&self, service: Service) -> bool {
        key_looks_valid(self.get(service))
    }
}

pub fn key_looks_valid(key: Option<&str>) -> bool {
    key.is_some_and(|k| k.chars().count() > MIN_VALID_KEY_LEN)
}

/// Masks a key for display, keeping the first 8 and last 4 characters.
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    let head: String = chars[..len.min(8)].iter().collect();
    let tail: String = chars[len.saturating_sub(4)..].iter().collect();
    format!("{}{}{}", head, "•".repeat(len.saturating_sub(12)), tail)
}

/// Runs the pretend connection test behind a fixed delay, one at a time.
#[derive(Debug, Default)]
pub struct ConnectionTester {
    scheduler: Scheduler<Service>,
    in_flight: Option<Service>,
    status: HashMap<Service, bool>,
}

impl ConnectionTester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_testing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Last completed result for `service`, if a test has finished.
    pub fn status(&self, service: Service) -> Option<bool> {
        self.status.get(&service).copied()
    }

    pub fn is_connected(&self, service: Service) -> bool {
        self.status(service).unwrap_or(false)
    }

    /// Starts a test. Rejected while another test is running.
    pub fn begin(&mut self, service: Service) -> Result<(), ValidationError> {
        if self.in_flight.is_some() {
            return Err(ValidationError::Busy);
        }
        self.in_flight = Some(service);
        self.scheduler.schedule(connection_test_delay(), service);
        info!("Testing {} connection", service);
        Ok(())
    }

    /// Advances the logical clock and completes any test whose delay elapsed.
    pub fn advance<S: KeyValueStore>(
        &mut self,
        dt: Duration,
        credentials: &CredentialStore<S>,
        toasts: &mut Toasts,
    ) {
        for service in self.scheduler.advance(dt) {
            let ok = credentials.is_valid(service);
            self.status.insert(service, ok);
            self.in_flight = None;
            if ok {
                toasts.success(format!("{service} connection successful!"));
            } else {
                toasts.error(format!(
                    "{service} connection failed. Please check your API key."
                ));
            }
        }
    }
}
