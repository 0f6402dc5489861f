//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectorConfig;
use crate::error::Result;
use crate::lineage::LineageRow;
use crate::output::{output_schema, COLUMNS};
use crate::pipeline::LineagePipeline;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub async fn run(&self) -> Result<()> {
        match self.cli.command {
            Commands::Run => self.run_pipeline().await,
            Commands::Check => self.check().await,
            Commands::Schema => {
                Self::print_schema();
                Ok(())
            }
        }
    }

    async fn run_pipeline(&self) -> Result<()> {
        let config = ConnectorConfig::from_env()?;
        let pipeline = LineagePipeline::new(config)?;
        let rows = pipeline.fetch_rows().await?;

        match self.cli.format {
            OutputFormat::Json => Self::print_json(&rows)?,
            OutputFormat::Pretty => Self::print_pretty(&rows),
        }

        Ok(())
    }

    async fn check(&self) -> Result<()> {
        let config = ConnectorConfig::from_env()?;
        let pipeline = LineagePipeline::new(config)?;
        pipeline.check().await?;
        println!("Connection OK");
        Ok(())
    }

    fn print_schema() {
        let schema = output_schema();
        for field in schema.fields() {
            println!("{}: {}", field.name(), field.data_type());
        }
    }

    fn print_json(rows: &[LineageRow]) -> Result<()> {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
        Ok(())
    }

    fn print_pretty(rows: &[LineageRow]) {
        let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
        for row in rows {
            for (i, value) in Self::cells(row).iter().enumerate() {
                widths[i] = widths[i].max(value.len());
            }
        }

        let header: Vec<String> = COLUMNS
            .iter()
            .zip(widths.iter().copied())
            .map(|(name, w)| format!("{name:<w$}"))
            .collect();
        println!("{}", header.join("  "));

        for row in rows {
            let line: Vec<String> = Self::cells(row)
                .iter()
                .zip(widths.iter().copied())
                .map(|(value, w)| format!("{value:<w$}"))
                .collect();
            println!("{}", line.join("  "));
        }
    }

    fn cells(row: &LineageRow) -> [&str; 4] {
        [
            row.ds_name.as_str(),
            row.flow_name.as_str(),
            row.owner_name.as_str(),
            row.project_name.as_str(),
        ]
    }
}
