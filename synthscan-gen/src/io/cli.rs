use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        short,
        long,
        global = true,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render text items onto synthetic scanned pages
    Generate {
        /// Text items, one per line, or a JSON array of strings
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
    },
    /// Score OCR transcripts of generated pages against their ground truth
    Evaluate {
        /// The page data written by `generate`
        #[arg(short, long, value_name = "FILE")]
        pages_file: PathBuf,
        /// OCR engine name and the folder holding its transcripts `ocr_<page>.txt`
        #[arg(short, long = "engine", value_name = "NAME=FOLDER", value_parser = parse_engine, required = true)]
        engines: Vec<(String, PathBuf)>,
        /// Pause between two consecutive pages
        #[arg(long, value_name = "MILLISECONDS", default_value_t = 2000)]
        delay_ms: u64,
    },
}

fn parse_engine(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((name, folder)) if !name.is_empty() && !folder.is_empty() => {
            Ok((name.to_string(), PathBuf::from(folder)))
        }
        _ => Err(format!("expected NAME=FOLDER, got '{arg}'")),
    }
}
