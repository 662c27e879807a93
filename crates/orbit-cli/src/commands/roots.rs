//! Roots command implementation.

use super::Service;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the roots command.
pub fn execute_roots(service: &Service, formatter: &Formatter) -> Result<()> {
    let roots = service.roots()?;
    if roots.is_empty() && !formatter.is_quiet() {
        eprintln!("{}", formatter.warning("No root objects resolved (is [objects.my_items] disabled?)"));
        return Ok(());
    }
    println!("{}", formatter.format_objects(&roots)?);
    Ok(())
}
