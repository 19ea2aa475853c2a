use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use synthscan::io::ext_repr::ExtPage;
use synthscan_gen::config::GenConfig;
use synthscan_gen::eval::{OcrEngine, TranscriptEngine, run_benchmark};
use synthscan_gen::generate::generate;
use synthscan_gen::io;
use synthscan_gen::io::cli::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    match args.command {
        Command::Generate {
            input_file,
            output_folder,
            config_file,
        } => {
            let config = match config_file {
                None => {
                    warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
                    GenConfig::default()
                }
                Some(config_file) => {
                    let file = File::open(config_file)?;
                    let reader = BufReader::new(file);
                    serde_json::from_reader(reader).context("incorrect config file format")?
                }
            };
            info!("[MAIN] Successfully parsed GenConfig: {config:?}");

            let texts = io::read_text_items(&input_file)?;
            info!("[MAIN] {} text items read from {}", texts.len(), input_file.display());

            let pages = generate(texts, &config, &output_folder)?;
            info!("[MAIN] {} files generated", pages.len());
            Ok(())
        }
        Command::Evaluate {
            pages_file,
            engines,
            delay_ms,
        } => main_evaluate(&pages_file, &engines, Duration::from_millis(delay_ms)),
    }
}

fn main_evaluate(
    pages_file: &Path,
    engines: &[(String, PathBuf)],
    delay: Duration,
) -> Result<()> {
    let pages: Vec<ExtPage> = io::read_json(pages_file)?;
    let mut engines = engines
        .iter()
        .map(|(name, folder)| Box::new(TranscriptEngine::new(name, folder)) as Box<dyn OcrEngine>)
        .collect::<Vec<_>>();

    let scores = run_benchmark(&pages, &mut engines, delay)?;
    for score in scores {
        println!("{} Accuracy: {:.2}%", score.engine, score.mean_accuracy);
    }
    Ok(())
}
