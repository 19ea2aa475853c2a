use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use synthscan::io::export_pages;
use synthscan::io::ext_repr::ExtPage;
use synthscan::packing::{PackError, PagePacker};
use thousands::Separable;

use crate::config::GenConfig;
use crate::io;
use crate::render::{RandomAugmenter, SvgPageSink, TextImageGenerator, load_fonts};

/// Name of the file holding the ground truth of all generated pages
pub const PAGES_FILE: &str = "ocr_data.json";

/// Renders `texts` onto pages in `output_folder` and writes their ground truth to [`PAGES_FILE`].
pub fn generate(texts: Vec<String>, config: &GenConfig, output_folder: &Path) -> Result<Vec<ExtPage>> {
    fs::create_dir_all(output_folder).with_context(|| {
        format!("could not create output folder: {}", output_folder.display())
    })?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let texts = match config.max_items {
        Some(max) => texts.into_iter().take(max).collect(),
        None => texts,
    };

    let renderer = TextImageGenerator::new(load_fonts(&config.fonts), config.style)?;
    let augmenter = RandomAugmenter::new(config.augment);
    let sink = SvgPageSink::new(output_folder, config.svg_draw_options.clone());
    let page_size = (config.page_size.width, config.page_size.height);

    let mut packer = PagePacker::try_new(config.packer, page_size, renderer, augmenter, sink, rng)
        .context("invalid packer configuration")?;
    let pages_file = output_folder.join(PAGES_FILE);

    let pages = match packer.pack(texts) {
        Ok(pages) => pages,
        Err(err) => {
            if let PackError::PlacementExhausted { pages, .. } = &err {
                //the pages already on disk still get their ground truth
                io::write_json(&export_pages(pages), &pages_file)?;
                warn!("[GEN] ground truth of {} pages written before aborting", pages.len());
            }
            return Err(err.into());
        }
    };

    let ext_pages = export_pages(&pages);
    io::write_json(&ext_pages, &pages_file)?;

    info!(
        "[GEN] {} pages generated ({} attempts)",
        ext_pages.len(),
        packer.attempt_counter.separate_with_commas()
    );
    Ok(ext_pages)
}
