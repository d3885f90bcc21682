use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Summary of one encoded (and possibly sent) message.
#[derive(Debug, Serialize)]
pub struct MessageReport<'a> {
    pub address: &'a str,
    pub type_tags: &'a str,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub hex: String,
}

impl<'a> MessageReport<'a> {
    pub fn new(address: &'a str, type_tags: &'a str, bytes: &[u8]) -> Self {
        Self {
            address,
            type_tags,
            size: bytes.len(),
            target: None,
            hex: hex::encode(bytes),
        }
    }

    pub fn with_target(mut self, target: impl ToString) -> Self {
        self.target = Some(target.to_string());
        self
    }
}

pub fn print_message(report: &MessageReport<'_>, bytes: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut summary = Table::new();
            summary
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ADDRESS", "TAGS", "SIZE", "TARGET"])
                .add_row(vec![
                    report.address.to_string(),
                    format!(",{}", report.type_tags),
                    report.size.to_string(),
                    report.target.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            println!("{summary}");
            println!("{}", dump_table(bytes));
        }
        OutputFormat::Pretty => {
            println!(
                "address={} tags=,{} size={} target={}",
                report.address,
                report.type_tags,
                report.size,
                report.target.as_deref().unwrap_or("-")
            );
            println!("{}", hex_words(bytes).join(" "));
        }
        OutputFormat::Raw => {
            print_raw(bytes);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// One row per 4-byte word, the alignment unit of the wire format.
fn dump_table(bytes: &[u8]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["OFFSET", "HEX", "ASCII"]);
    for (row, word) in bytes.chunks(4).enumerate() {
        table.add_row(vec![
            format!("{:04}", row * 4),
            hex::encode(word),
            ascii_preview(word),
        ]);
    }
    table
}

pub fn hex_words(bytes: &[u8]) -> Vec<String> {
    bytes.chunks(4).map(hex::encode).collect()
}

fn ascii_preview(word: &[u8]) -> String {
    word.iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect()
}
