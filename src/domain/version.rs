use std::fmt;

use crate::domain::AppError;

/// A canonical `major.minor.patch[-pre][+build]` version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Coerce `input` into a canonical version.
    ///
    /// Strictly valid semver passes through unchanged. Otherwise one to three
    /// numeric segments (optionally prefixed with `v` or `=`) are accepted and
    /// padded with zeros, so `"5"` becomes `5.0.0`. Anything else is rejected.
    pub fn normalize(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if let Ok(inner) = semver::Version::parse(trimmed) {
            return Ok(Self { inner });
        }
        coerce(trimmed)
            .map(|inner| Self { inner })
            .ok_or_else(|| AppError::InvalidVersion(input.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Shorthand for [`Version::normalize`].
pub fn normalize(input: &str) -> Result<Version, AppError> {
    Version::normalize(input)
}

fn coerce(s: &str) -> Option<semver::Version> {
    let s = s.strip_prefix(|c: char| c == 'v' || c == '=').unwrap_or(s).trim_start();
    if s.is_empty() {
        return None;
    }

    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() > 3 {
        return None;
    }

    let mut parts = [0u64; 3];
    for (idx, segment) in segments.iter().enumerate() {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        parts[idx] = segment.parse().ok()?;
    }

    Some(semver::Version::new(parts[0], parts[1], parts[2]))
}
