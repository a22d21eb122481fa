#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use movement_core::domain::{BankAccountId, ClientId, Movement};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn timestamp(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// A fully linked, reversible transfer.
pub fn transfer(id: &str, cents: i64) -> Movement {
    Movement::new("TRANSFER", Decimal::new(cents, 2), Decimal::new(100_000 - cents, 2))
        .with_id(id)
        .with_date(timestamp(10, 9, 30))
        .with_origin(BankAccountId::new("ES7620770024003102575766"))
        .with_destination(BankAccountId::new("ES6621000418401234567891"))
        .with_sender(ClientId::new("1"))
        .with_recipient(ClientId::new("2"))
        .reversible_until(timestamp(17, 9, 30))
}

/// A movement with none of its optional references set.
pub fn bare(id: &str) -> Movement {
    Movement::new("DEPOSIT", Decimal::new(2500, 2), Decimal::new(12500, 2))
        .with_id(id)
        .with_date(timestamp(3, 12, 0))
}
