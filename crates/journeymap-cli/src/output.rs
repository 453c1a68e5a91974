use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

fn print_json(value: &JsonValue) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(_) => println!("{}", value),
    }
}

fn eprint_json(value: &JsonValue) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => eprintln!("{}", s),
        Err(_) => eprintln!("{}", value),
    }
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { format: if json { OutputFormat::Json } else { OutputFormat::Human } }
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "status": "success",
                    "message": message.to_string(),
                }));
            }
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "status": "info",
                    "message": message.to_string(),
                }));
            }
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                eprint_json(&serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                }));
            }
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("✗").red().bold(), message);
            }
            OutputFormat::Json => {
                eprint_json(&serde_json::json!({
                    "status": "error",
                    "message": message.to_string(),
                }));
            }
        }
    }

    /// Rounded table for humans; the rows themselves as JSON otherwise
    pub fn table<T: Tabled + Serialize>(&self, rows: Vec<T>) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                if rows.is_empty() {
                    println!("{}", style("(no data)").dim());
                } else {
                    let mut table = Table::new(rows);
                    table.with(Style::rounded());
                    println!("{}", table);
                }
            }
            OutputFormat::Json => self.result(rows)?,
        }
        Ok(())
    }

    /// Raw JSON regardless of mode, for machine formats such as GeoJSON
    pub fn data<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        let json_str = serde_json::to_string_pretty(data)?;
        println!("{}", json_str);
        Ok(())
    }

    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.data(&data)?;
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "success",
                    "data": data,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{}: {}", style(key).bold(), value);
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({ key.to_string(): value.to_string() }));
            }
        }
    }

    pub fn section(&self, title: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("\n{}", style(title).bold().underlined());
            }
            OutputFormat::Json => {}
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
