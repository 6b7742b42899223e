//! Invite files on disk.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use calshare_core::constants::{DEFAULT_FILE_SUFFIX, MIN_FILE_PREFIX_LENGTH};
use calshare_ical::{Calendar, Event};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::invite::file_prefix;

const MAX_NAME_ATTEMPTS: usize = 64;

/// ## Summary
/// Creates a new, empty file named `<prefix><random number><suffix>` in `dir`.
///
/// The suffix defaults to `.tmp`. Names that already exist are skipped.
///
/// ## Errors
/// Returns an error if the prefix is shorter than three characters, the file cannot
/// be created, or no unused name turns up.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn create_temp_file(prefix: &str, suffix: Option<&str>, dir: &Path) -> AppResult<PathBuf> {
    if prefix.chars().count() < MIN_FILE_PREFIX_LENGTH {
        return Err(AppError::PrefixTooShort(prefix.to_string()));
    }
    let suffix = suffix.unwrap_or(DEFAULT_FILE_SUFFIX);

    for _ in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(format!("{prefix}{}{suffix}", random_number()));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                tracing::debug!(path = %path.display(), "Created invite file");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::trace!(path = %path.display(), "File name taken, retrying");
            }
            Err(e) => return Err(AppError::io(path, e)),
        }
    }

    Err(AppError::NamesExhausted(dir.to_path_buf()))
}

/// Non-negative 31-bit number for file names.
fn random_number() -> u32 {
    Uuid::new_v4().as_fields().0 & 0x7FFF_FFFF
}

/// ## Summary
/// Renders `calendar` and writes it to `path`, replacing any previous content.
///
/// ## Errors
/// Returns an error if the calendar cannot be rendered or the file cannot be written.
pub fn write_calendar_to_file(calendar: &Calendar, path: &Path) -> AppResult<()> {
    let text = calendar.render()?;
    fs::write(path, &text).map_err(|e| AppError::io(path, e))?;

    tracing::info!(path = %path.display(), bytes = text.len(), "Wrote calendar");
    Ok(())
}

/// ## Summary
/// Reads and parses the calendar in `path`.
///
/// Returns `Ok(None)` when the file has no lines at all.
///
/// ## Errors
/// Returns an error if the file cannot be read or its content does not parse.
pub fn read_calendar_from_file(path: &Path) -> AppResult<Option<Calendar>> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    if text.is_empty() {
        tracing::debug!(path = %path.display(), "Calendar file is empty");
        return Ok(None);
    }

    let calendar = Calendar::from_text(&text)?;
    tracing::debug!(
        path = %path.display(),
        events = calendar.events().len(),
        "Read calendar"
    );
    Ok(Some(calendar))
}

/// ## Summary
/// Copies `from` to `to` and returns the number of bytes copied.
///
/// ## Errors
/// Returns an error if either file cannot be opened.
pub fn copy_file(from: &Path, to: &Path) -> AppResult<u64> {
    let bytes = fs::copy(from, to).map_err(|e| AppError::io(from, e))?;
    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "Copied file");
    Ok(bytes)
}

/// ## Summary
/// Renders `calendar` into a new `<prefix><random number><suffix>` file in `dir`.
///
/// Nothing is left in `dir` when rendering or writing fails.
///
/// ## Errors
/// Returns an error if the calendar cannot be rendered, or the file cannot be
/// created or written.
#[tracing::instrument(skip(calendar, dir), fields(dir = %dir.display()))]
pub fn write_new_calendar_file(
    calendar: &Calendar,
    prefix: &str,
    suffix: Option<&str>,
    dir: &Path,
) -> AppResult<PathBuf> {
    let text = calendar.render()?;
    let path = create_temp_file(prefix, suffix, dir)?;
    if let Err(e) = fs::write(&path, &text) {
        discard(&path);
        return Err(AppError::io(path, e));
    }

    tracing::info!(path = %path.display(), bytes = text.len(), "Wrote calendar");
    Ok(path)
}

/// ## Summary
/// Reads the calendar in `path`, treating an empty file as an error.
///
/// ## Errors
/// Returns [`AppError::EmptyInput`] for an empty file, or the read or parse error.
pub fn read_existing_calendar(path: &Path) -> AppResult<Calendar> {
    read_calendar_from_file(path)?.ok_or_else(|| AppError::EmptyInput(path.to_path_buf()))
}

/// ## Summary
/// Validates the invite in `from` and copies it into a new file in `dir`, named
/// after its first event.
///
/// ## Errors
/// Returns an error if `from` is empty or malformed, or the copy fails. No file is
/// created in `dir` in either case.
#[tracing::instrument(skip(dir), fields(from = %from.display(), dir = %dir.display()))]
pub fn import_calendar_file(from: &Path, suffix: Option<&str>, dir: &Path) -> AppResult<PathBuf> {
    let calendar = read_existing_calendar(from)?;
    tracing::info!(events = calendar.events().len(), "Invite file is valid");

    let prefix = file_prefix(calendar.first_event().and_then(Event::summary).as_deref());
    let target = create_temp_file(&prefix, suffix, dir)?;
    if let Err(e) = copy_file(from, &target) {
        discard(&target);
        return Err(e);
    }

    Ok(target)
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial invite file");
    }
}
