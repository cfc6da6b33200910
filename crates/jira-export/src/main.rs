//! jira-export - writes the nu3PBnB project-planning catalog as a CSV file
//! ready for JIRA's CSV importer, then prints a per-kind summary.

mod issues;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use issues::{ISSUES, IssueType};

#[derive(Parser, Debug)]
#[command(name = "jira-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output CSV path
    #[arg(long, default_value = "jira-import-nu3pbnb.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;

    for issue in ISSUES {
        writer.serialize(issue).context("Failed to write issue")?;
    }
    writer.flush().context("Failed to flush output")?;

    let count = |kind| ISSUES.iter().filter(|i| i.issue_type == kind).count();
    println!("Generated JIRA import file with {} issues:", ISSUES.len());
    println!("- {} Epics", count(IssueType::Epic));
    println!("- {} Stories", count(IssueType::Story));
    println!("- {} Tasks", count(IssueType::Task));
    println!();
    println!("File saved as: {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_starts_with_the_importer_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for issue in ISSUES {
            writer.serialize(issue).unwrap();
        }
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Issue Type,Epic Link,Summary,Description,Priority,Story Points,\
             Labels,Components,Acceptance Criteria,Test Results"
        );
    }

    #[test]
    fn csv_has_one_record_per_issue() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for issue in ISSUES {
            writer.serialize(issue).unwrap();
        }
        let bytes = writer.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(reader.records().count(), ISSUES.len());
    }
}
