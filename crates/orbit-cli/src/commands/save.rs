//! Save command implementation.

use super::Service;
use crate::cli::SaveArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use orbit_domain::DomainObject;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the save command.
pub fn execute_save(args: SaveArgs, service: &Service, formatter: &Formatter) -> Result<()> {
    let json = read_source(&args)?;
    let object = save_json(&json, service)?;

    if formatter.is_quiet() {
        println!("{}", object.identifier);
    } else {
        println!("{}", formatter.success(&format!("Object saved: {}", object.identifier)));
    }
    Ok(())
}

fn read_source(args: &SaveArgs) -> Result<String> {
    match (&args.file, args.stdin) {
        (Some(path), _) => Ok(fs::read_to_string(path)?),
        (None, true) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (None, false) => Err(CliError::InvalidInput(
            "Provide an object with --file <PATH> or --stdin".to_string(),
        )),
    }
}

/// Parse one object from JSON and persist it.
pub fn save_json(json: &str, service: &Service) -> Result<DomainObject> {
    let object: DomainObject = serde_json::from_str(json)?;
    if object.identifier.key.is_empty() {
        return Err(CliError::InvalidInput("Object identifier has an empty key".to_string()));
    }

    service.save(&object)?;
    info!(identifier = %object.identifier, "Saved object");
    Ok(object)
}
