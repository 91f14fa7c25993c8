use std::path::PathBuf;
use std::str::FromStr;

use locsheet::{ExportConfig, ExportReport, Platform, export_translations};

#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub sheet: Option<String>,
    pub output: Option<PathBuf>,
    pub platform: Option<String>,
    pub json: bool,
}

/// Merges the configuration file (if any) with command line flags.
fn resolve_config(args: &ExportArgs) -> Result<ExportConfig, String> {
    let base = match &args.config {
        Some(path) => Some(ExportConfig::load(path).map_err(|e| e.to_string())?),
        None => None,
    };

    let source = args
        .input
        .clone()
        .or_else(|| base.as_ref().map(|c| c.source.clone()))
        .ok_or("missing input: pass --input or set `source` in the config file")?;
    let export_dir = args
        .output
        .clone()
        .or_else(|| base.as_ref().map(|c| c.export_dir.clone()))
        .ok_or("missing output: pass --output or set `export_dir` in the config file")?;
    let platform = match &args.platform {
        Some(p) => Platform::from_str(p).map_err(|e| e.to_string())?,
        None => base.as_ref().map(|c| c.platform).unwrap_or_default(),
    };
    let sheet = args
        .sheet
        .clone()
        .or_else(|| base.as_ref().and_then(|c| c.sheet.clone()));

    let config = ExportConfig {
        source,
        sheet,
        export_dir,
        platform,
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn print_report(report: &ExportReport, export_dir: &std::path::Path) {
    for document in &report.documents {
        println!(
            "✅ Exported {} ({} entries): {}",
            document.language,
            document.entries,
            export_dir.join(&document.path).display()
        );
    }
    println!(
        "🎉 All translations exported successfully for {}!",
        report.platform
    );
}

pub fn run_export_command(args: ExportArgs) {
    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match export_translations(&config) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&report, &config.export_dir);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
