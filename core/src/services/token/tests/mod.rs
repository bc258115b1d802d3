mod key_provider_tests;

use std::io;
use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::STANDARD, Engine};
use certif_shared::{logging::format_layer, JwtConfig, LogFormat, LoggingConfig};
use chrono::{DateTime, TimeZone, Utc};
use tracing_subscriber::{layer::SubscriberExt, Registry};

use crate::services::token::{FixedClock, TokenService};

/// Base64 secret of 32 copies of `byte`
fn secret_of(byte: u8) -> String {
    STANDARD.encode([byte; 32])
}

fn config_of(byte: u8) -> JwtConfig {
    JwtConfig::new(secret_of(byte))
}

fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap()
}

fn fixed_service(byte: u8, at: DateTime<Utc>) -> TokenService<FixedClock> {
    TokenService::with_clock(&config_of(byte), FixedClock::new(at))
        .expect("Failed to create token service")
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with debug-level compact logging captured, returns the output
fn capture_logs(f: impl FnOnce()) -> String {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Compact,
        colored: false,
        source_location: false,
    };
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::registry()
        .with(format_layer::<Registry, _>(&config, move || writer.clone()));

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
