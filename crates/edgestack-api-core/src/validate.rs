//! Field whitelists and per-field validators.
//!
//! Updates are whitelisted: fields outside the allowed set are silently
//! dropped, fields inside it are validated individually, and all failures
//! are collected into one `details` map so a caller can fix everything in
//! one round trip.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use edgestack_api_model::{Activeness, ApplicationStatus, ItemCategory};

use crate::storage::Record;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email regex"));

static EPOCH_MS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{13}$").expect("valid epoch-ms regex"));

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid ISO date regex"));

static IMG_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid URL regex"));

static ITEM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^item:[a-fA-F0-9\-]{36}$").expect("valid item id regex"));

/// Whether an item id has the required `item:<uuid>` shape.
#[must_use]
pub fn is_valid_item_id(id: &str) -> bool {
    ITEM_ID_RE.is_match(id)
}

/// Validate a profile update body against the profile whitelist.
///
/// Returns the accepted field set and the per-field errors; non-whitelisted
/// fields land in neither.
#[must_use]
pub fn validate_profile_update(body: &Record) -> (Record, FieldErrors) {
    let mut update = Record::new();
    let mut errors = FieldErrors::new();

    for (name, value) in body {
        let verdict = match name.as_str() {
            "email" => check(
                as_str(value).is_some_and(|s| EMAIL_RE.is_match(s)),
                "Must be a valid email address",
            ),
            "displayName" => check(
                as_str(value).is_some_and(|s| char_len_in(s, 1, 50) && !has_control_chars(s)),
                "Must be 1-50 chars, no control chars",
            ),
            "realName" => check(
                as_str(value).is_some_and(|s| char_len_in(s, 1, 100)),
                "Must be 1-100 chars",
            ),
            "activeness" => check(
                as_str(value).is_some_and(|s| Activeness::from_name(s).is_some()),
                "Must be one of: active, dormant, inactive",
            ),
            "role" => check(
                is_string_array(value, |s| char_len_in(s, 1, 30)),
                "Must be array of strings, each 1-30 chars",
            ),
            "interestTags" => check(
                is_string_array(value, |s| char_len_in(s, 0, 30)),
                "Must be array of strings, each at most 30 chars",
            ),
            "applicationResponse" => check(
                as_str(value).is_some_and(|s| char_len_in(s, 0, 1000)),
                "Must be string, max 1000 chars",
            ),
            "dateOfJoining" => check(
                as_str(value).is_some_and(|s| EPOCH_MS_RE.is_match(s) || ISO_DATE_RE.is_match(s)),
                "Must be ISO8601 date string or epoch ms as string",
            ),
            "applicationStatus" => check(
                as_str(value).is_some_and(|s| ApplicationStatus::from_name(s).is_some()),
                "Must be one of: rejected, accepted, under review",
            ),
            // Not whitelisted; ignore.
            _ => continue,
        };

        match verdict {
            Ok(()) => {
                update.insert(name.clone(), value.clone());
            }
            Err(message) => {
                errors.insert(name.clone(), message.to_owned());
            }
        }
    }

    (update, errors)
}

/// Validate an item update body against the item whitelist.
#[must_use]
pub fn validate_item_update(body: &Record) -> (Record, FieldErrors) {
    let mut update = Record::new();
    let mut errors = FieldErrors::new();

    for (name, value) in body {
        let verdict = match name.as_str() {
            "title" => check(
                as_str(value).is_some_and(|s| char_len_in(s, 0, 100)),
                "Must be string, max 100 chars",
            ),
            "description" => check(
                as_str(value).is_some_and(|s| char_len_in(s, 0, 500)),
                "Must be string, max 500 chars",
            ),
            "category" => check(
                as_str(value).is_some_and(|s| ItemCategory::from_name(s).is_some()),
                "Must be one of: education, fitness, tools",
            ),
            "tags" => check(
                is_valid_tag_array(value),
                "Must be array of lowercase strings, max 10 tags, each at most 30 chars",
            ),
            "imgUrl" => check(
                as_str(value).is_some_and(|s| IMG_URL_RE.is_match(s)),
                "Must be a valid URL",
            ),
            "popularity" => check(value.as_i64().is_some(), "Must be integer"),
            _ => continue,
        };

        match verdict {
            Ok(()) => {
                update.insert(name.clone(), value.clone());
            }
            Err(message) => {
                errors.insert(name.clone(), message.to_owned());
            }
        }
    }

    (update, errors)
}

fn check(ok: bool, message: &'static str) -> Result<(), &'static str> {
    if ok { Ok(()) } else { Err(message) }
}

fn as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Character-count bounds check (inclusive).
fn char_len_in(s: &str, min: usize, max: usize) -> bool {
    let len = s.chars().count();
    len >= min && len <= max
}

fn has_control_chars(s: &str) -> bool {
    s.chars().any(|c| (c as u32) < 0x20)
}

fn is_string_array(value: &Value, element_ok: impl Fn(&str) -> bool) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|v| v.as_str().is_some_and(&element_ok)))
}

fn is_valid_tag_array(value: &Value) -> bool {
    value.as_array().is_some_and(|tags| {
        tags.len() <= 10
            && tags.iter().all(|v| {
                v.as_str()
                    .is_some_and(|s| s == s.to_lowercase() && char_len_in(s, 0, 30))
            })
    })
}
