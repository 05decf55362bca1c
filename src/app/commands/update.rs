//! Update command: resolve a new "Tested up to" value and write it to the readme.

use crate::app::AppContext;
use crate::domain::{AppError, RunMode, Version, VersionSource};
use crate::ports::{Interaction, ReadmeStore, Status, VersionCheck};

/// Result of an update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The field was rewritten.
    Updated { previous: String, current: String },
    /// The user said the tool is not running from the plugin root.
    Declined,
    /// The user cancelled a prompt.
    Cancelled,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Run the update workflow for `mode`.
///
/// The readme is written at most once, and only after every check for the
/// selected branch has passed.
pub fn execute<R, V, I>(
    ctx: &AppContext<R, V, I>,
    mode: RunMode,
) -> Result<UpdateOutcome, AppError>
where
    R: ReadmeStore,
    V: VersionCheck,
    I: Interaction,
{
    tracing::debug!(mode = mode.label(), readme = %ctx.readme().location(), "starting update");

    match mode {
        RunMode::Latest => {
            let previous = show_current(ctx)?;
            update_to_latest(ctx, previous)
        }
        RunMode::Custom(input) => {
            let previous = show_current(ctx)?;
            let value = validated(&input)?;
            write_version(ctx, previous, value)
        }
        RunMode::Interactive => run_interactive(ctx),
    }
}

fn run_interactive<R, V, I>(ctx: &AppContext<R, V, I>) -> Result<UpdateOutcome, AppError>
where
    R: ReadmeStore,
    V: VersionCheck,
    I: Interaction,
{
    let ui = ctx.interaction();

    match ui.confirm_plugin_root()? {
        None => return Ok(UpdateOutcome::Cancelled),
        Some(false) => return Ok(UpdateOutcome::Declined),
        Some(true) => {}
    }

    let previous = show_current(ctx)?;

    let Some(source) = ui.choose_source()? else {
        return Ok(UpdateOutcome::Cancelled);
    };
    tracing::debug!(?source, "version source selected");

    match source {
        VersionSource::Latest => update_to_latest(ctx, previous),
        VersionSource::Custom => {
            let initial = validated(&previous).unwrap_or_default().to_string();
            let validate =
                |value: &str| Version::normalize(value).map(|_| ()).map_err(|e| e.to_string());

            let Some(input) = ui.input_version(&initial, &validate)? else {
                return Ok(UpdateOutcome::Cancelled);
            };
            let value = validated(&input)?;
            write_version(ctx, previous, value)
        }
    }
}

/// Read the current value and display it, normalized when possible.
fn show_current<R, V, I>(ctx: &AppContext<R, V, I>) -> Result<String, AppError>
where
    R: ReadmeStore,
    V: VersionCheck,
    I: Interaction,
{
    let raw = ctx.readme().read_field(ctx.field_key())?;
    let shown = match Version::normalize(&raw) {
        Ok(version) => version.to_string(),
        Err(_) => {
            tracing::warn!(value = %raw, "current value is not a valid version");
            raw.clone()
        }
    };
    tracing::debug!(current = %shown, "current version");
    ctx.interaction().report(&Status::Current(shown));
    Ok(raw)
}

fn update_to_latest<R, V, I>(
    ctx: &AppContext<R, V, I>,
    previous: String,
) -> Result<UpdateOutcome, AppError>
where
    R: ReadmeStore,
    V: VersionCheck,
    I: Interaction,
{
    let latest = resolve_latest(ctx.versions())?;
    ctx.interaction().report(&Status::Latest(latest.clone()));
    write_version(ctx, previous, &latest)
}

/// Fetch the latest offered version as offered, rejecting values that do not
/// normalize.
pub fn resolve_latest(versions: &impl VersionCheck) -> Result<String, AppError> {
    let latest = versions.latest_version()?;
    match validated(&latest) {
        Ok(value) => Ok(value.to_string()),
        Err(_) => Err(AppError::version_check(format!(
            "Response contained an invalid version '{}'",
            latest
        ))),
    }
}

/// Trimmed `input`, provided it normalizes to a version.
fn validated(input: &str) -> Result<&str, AppError> {
    let value = input.trim();
    Version::normalize(value)?;
    Ok(value)
}

fn write_version<R, V, I>(
    ctx: &AppContext<R, V, I>,
    previous: String,
    value: &str,
) -> Result<UpdateOutcome, AppError>
where
    R: ReadmeStore,
    V: VersionCheck,
    I: Interaction,
{
    let current = value.to_string();
    ctx.readme().write_field(ctx.field_key(), &current)?;
    tracing::info!(%previous, %current, "updated readme field");
    ctx.interaction().report(&Status::Updated(current.clone()));
    Ok(UpdateOutcome::Updated { previous, current })
}
