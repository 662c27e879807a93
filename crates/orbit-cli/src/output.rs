//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use orbit_domain::DomainObject;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of objects.
    pub fn format_objects(&self, objects: &[DomainObject]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_objects_json(objects),
            OutputFormat::Table => self.format_objects_table(objects),
            OutputFormat::Quiet => self.format_objects_quiet(objects),
        }
    }

    /// Format a single object. JSON output is the bare object, not a list.
    pub fn format_object(&self, object: &DomainObject) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(object)?),
            _ => self.format_objects(std::slice::from_ref(object)),
        }
    }

    fn format_objects_json(&self, objects: &[DomainObject]) -> Result<String> {
        Ok(serde_json::to_string_pretty(objects)?)
    }

    fn format_objects_table(&self, objects: &[DomainObject]) -> Result<String> {
        if objects.is_empty() {
            return Ok(self.colorize("No objects found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Name", "Type", "Location", "Children"]);

        for object in objects {
            builder.push_record([
                object.identifier.to_string(),
                object.name.clone(),
                object.object_type.clone(),
                object.location.to_string(),
                object.composition.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Key strings only, one per line.
    fn format_objects_quiet(&self, objects: &[DomainObject]) -> Result<String> {
        let keys: Vec<String> = objects.iter().map(|o| o.identifier.to_string()).collect();
        Ok(keys.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether output is restricted to bare keys.
    pub fn is_quiet(&self) -> bool {
        self.format == OutputFormat::Quiet
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_domain::{Location, ObjectIdentifier};

    fn create_test_object() -> DomainObject {
        let mut folder = DomainObject::folder(ObjectIdentifier::new("mct", "mine"), "My Items", Location::Root);
        folder.add_child(ObjectIdentifier::new("mct", "child-1"));
        folder
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_objects(&[create_test_object()]).unwrap();
        assert!(output.starts_with('['));
        assert!(output.contains("\"My Items\""));
        assert!(output.contains("\"folder\""));
    }

    #[test]
    fn test_single_object_json_is_not_a_list() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_object(&create_test_object()).unwrap();
        assert!(output.starts_with('{'));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_objects(&[create_test_object()]).unwrap();
        assert_eq!(output, "mct:mine");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_objects(&[create_test_object()]).unwrap();
        assert!(output.contains("Key"));
        assert!(output.contains("Children"));
        assert!(output.contains("mct:mine"));
        assert!(output.contains("ROOT"));
    }

    #[test]
    fn test_empty_objects() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_objects(&[]).unwrap();
        assert!(output.contains("No objects found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
