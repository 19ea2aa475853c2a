use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use synthscan::io::ext_repr::ExtPage;

use crate::eval::word_accuracy;

/// An OCR backend which turns a page into text
pub trait OcrEngine {
    fn name(&self) -> &str;

    fn recognize(&mut self, page: &ExtPage) -> Result<String>;
}

/// Serves previously recorded OCR output, stored as `ocr_<page_number>.txt` in `folder`.
pub struct TranscriptEngine {
    pub name: String,
    pub folder: PathBuf,
}

impl TranscriptEngine {
    pub fn new(name: &str, folder: &Path) -> Self {
        Self {
            name: name.to_string(),
            folder: folder.to_path_buf(),
        }
    }

    pub fn transcript_path(&self, page_number: usize) -> PathBuf {
        self.folder.join(format!("ocr_{page_number}.txt"))
    }
}

impl OcrEngine for TranscriptEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognize(&mut self, page: &ExtPage) -> Result<String> {
        let path = self.transcript_path(page.page_number);
        fs::read_to_string(&path)
            .with_context(|| format!("[{}] missing transcript: {}", self.name, path.display()))
    }
}

/// Word accuracy of a single engine over all pages
#[derive(Clone, Debug, PartialEq)]
pub struct EngineScore {
    pub engine: String,
    /// Word accuracy per page, in page order
    pub page_accuracies: Vec<f64>,
    /// Average word accuracy over all pages, in percent
    pub mean_accuracy: f64,
}

/// Runs every engine on every page and scores the output against the page's full text.
/// Engines are called page by page, with a pause of `delay` after each page.
/// The scores are returned from best to worst.
pub fn run_benchmark(
    pages: &[ExtPage],
    engines: &mut [Box<dyn OcrEngine>],
    delay: Duration,
) -> Result<Vec<EngineScore>> {
    ensure!(!pages.is_empty(), "no pages to evaluate");
    let page_count = pages.len() as f64;

    let mut scores = engines
        .iter()
        .map(|e| EngineScore {
            engine: e.name().to_string(),
            page_accuracies: vec![],
            mean_accuracy: 0.0,
        })
        .collect_vec();

    for (i, page) in pages.iter().enumerate() {
        for (engine, score) in engines.iter_mut().zip(scores.iter_mut()) {
            let ocr_text = engine.recognize(page)?;
            let accuracy = word_accuracy(&page.full_text, &ocr_text);
            debug!(
                "[EVAL] page {}: {} scored {:.2}%",
                page.page_number,
                engine.name(),
                accuracy
            );
            score.page_accuracies.push(accuracy);
            score.mean_accuracy += accuracy / page_count;
        }
        if i + 1 < pages.len() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    scores.sort_by_key(|s| Reverse(OrderedFloat(s.mean_accuracy)));
    for s in &scores {
        info!("[EVAL] {} accuracy: {:.2}%", s.engine, s.mean_accuracy);
    }
    Ok(scores)
}
