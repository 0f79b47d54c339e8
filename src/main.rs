use std::io::Read;

use column_report::{parse_rows, Report, ReportConfig};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

fn main() {
    let config = ReportConfig::parse("column-report");

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Reporting columns {:?} of '{}' in spreadsheet '{}'.",
            config.report_indices, config.read_range, config.spreadsheet_id
        );
    }

    let mut input = String::default();

    if let Err(error) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Unable to read rows: {error}");
        std::process::exit(1);
    }

    match Report::from(&config).render(&parse_rows(&input)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(error) => {
            eprintln!("Report error: {error}");
            std::process::exit(1);
        }
    }
}
