//! Print the resolved launcher.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Write the launcher to `out` and any warnings to `err`.
///
/// `out` receives exactly one line. Nothing is written to `out` on failure.
pub fn execute(
    ctx: &CliContext,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let resolution = ctx.chplenv.launcher()?;

    for warning in &resolution.warnings {
        writeln!(err, "Warning: {warning}")?;
    }
    writeln!(out, "{}", resolution.launcher)?;
    out.flush()?;
    Ok(())
}
