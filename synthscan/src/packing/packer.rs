use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, ensure};
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::entities::PageState;
use crate::packing::{Augmenter, Measured, PackError, PageSink, TextRenderer};
use crate::placement::{UniformCentroidSampler, can_place, find_placement};
use crate::util::PackerConfig;
use crate::util::assertions;

/// A page which has been written out by the [`PageSink`].
#[derive(Clone, Debug)]
pub struct FinishedPage {
    pub page: PageState,
    pub path: PathBuf,
}

/// Outcome of trying to place a single item on the current page.
#[derive(Clone, Debug)]
pub enum Transition {
    /// The item was placed, the page can take more items.
    Placed(PageState),
    /// None of the attempts succeeded, the page has to be finalized.
    PageFull(PageState),
}

/// Greedy page packer.
/// Places text items one by one, in order, rolling over to a new page whenever an item
/// cannot be placed on the current one.
pub struct PagePacker<R, A, S>
where
    R: TextRenderer,
    A: Augmenter<R::Image>,
    S: PageSink<R::Image>,
{
    pub config: PackerConfig,
    pub page_width: f32,
    pub page_height: f32,
    pub renderer: R,
    pub augmenter: A,
    pub sink: S,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub attempt_counter: usize,
}

impl<R, A, S> PagePacker<R, A, S>
where
    R: TextRenderer,
    A: Augmenter<R::Image>,
    S: PageSink<R::Image>,
{
    pub fn try_new(
        config: PackerConfig,
        (page_width, page_height): (f32, f32),
        renderer: R,
        augmenter: A,
        sink: S,
        rng: SmallRng,
    ) -> Result<Self> {
        ensure!(config.n_attempts > 0, "at least one placement attempt per item is required");
        ensure!(
            page_width.is_finite() && page_height.is_finite() && page_width > 0.0 && page_height > 0.0,
            "invalid page size, width: {page_width}, height: {page_height}"
        );
        Ok(Self {
            config,
            page_width,
            page_height,
            renderer,
            augmenter,
            sink,
            rng,
            attempt_counter: 0,
        })
    }

    /// Places all `texts` in order. Every text ends up on exactly one page.
    /// Returns the finalized pages, in order.
    /// If an item exceeds the rollover limit, the pages finalized so far are returned inside the error.
    pub fn pack<T: Into<String>>(
        &mut self,
        texts: impl IntoIterator<Item = T>,
    ) -> Result<Vec<FinishedPage>, PackError> {
        let start = Instant::now();
        let mut pending: VecDeque<String> = texts.into_iter().map(Into::into).collect();
        let n_items = pending.len();
        let mut finished = vec![];

        if pending.is_empty() {
            info!("[PACK] no items to place");
            return Ok(finished);
        }

        let mut page = PageState::new(0, self.page_width, self.page_height);
        let mut canvas = self.sink.open_page(&page)?;
        let mut item_index = 0;
        let mut rollovers = 0;

        while let Some(text) = pending.front() {
            match self.try_place(page, &mut canvas, text)? {
                Transition::Placed(p) => {
                    page = p;
                    pending.pop_front();
                    item_index += 1;
                    rollovers = 0;
                    info!(
                        "[PACK] placed item {}/{} on page {} ({} items on page)",
                        item_index,
                        n_items,
                        page.page_index,
                        page.n_placed()
                    );
                }
                Transition::PageFull(p) => {
                    rollovers += 1;
                    if p.is_empty() {
                        warn!(
                            "[PACK] item {item_index} did not fit on empty page {}, rolling over (rollover {rollovers})",
                            p.page_index
                        );
                    }
                    let next = p.next();
                    finished.push(self.finalize(p, canvas)?);

                    if self
                        .config
                        .max_rollovers_per_item
                        .is_some_and(|max| rollovers > max)
                    {
                        return Err(PackError::PlacementExhausted {
                            item_index,
                            rollovers,
                            pages: finished,
                        });
                    }

                    canvas = self.sink.open_page(&next)?;
                    page = next;
                }
            }
        }
        finished.push(self.finalize(page, canvas)?);

        info!(
            "[PACK] placed {} items on {} pages in {:.3}ms ({} attempts)",
            n_items,
            finished.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.attempt_counter
        );

        Ok(finished)
    }

    /// Tries to place `text` on `page`, re-rendering the item on every attempt.
    /// Each attempt first tests a uniformly sampled centroid and falls back to the grid search.
    pub fn try_place(
        &mut self,
        mut page: PageState,
        canvas: &mut S::Canvas,
        text: &str,
    ) -> Result<Transition, PackError> {
        let sampler = UniformCentroidSampler::new(page.page_width, page.page_height);

        for attempt in 0..self.config.n_attempts {
            self.attempt_counter += 1;
            let image = self.renderer.render(text, &mut self.rng)?;
            let image = self.augmenter.augment(image, &mut self.rng);
            //the augmentation may have changed the size
            let size = image.size();

            let (x, y) = sampler.sample(&mut self.rng);
            let (w, h) = (page.page_width, page.page_height);
            let centroid = match can_place(size, x, y, page.existing_boxes(), w, h) {
                true => Some((x, y)),
                false => find_placement(size, page.existing_boxes(), w, h, &self.config.grid_search)
                    .inspect(|(gx, gy)| {
                        debug!("[PACK] attempt {attempt}: grid search hit at ({gx}, {gy})")
                    }),
            };

            if let Some((x, y)) = centroid {
                let bbox = self.sink.place(canvas, &image, x, y)?;
                page.register(bbox, text);
                debug_assert!(assertions::page_is_valid(&page));
                return Ok(Transition::Placed(page));
            }
        }
        Ok(Transition::PageFull(page))
    }

    fn finalize(&mut self, page: PageState, canvas: S::Canvas) -> Result<FinishedPage, PackError> {
        let path = self.sink.finalize(canvas, &page)?;
        info!(
            "[PACK] finalized page {} with {} items ({:.1}% covered): {}",
            page.page_index,
            page.n_placed(),
            page.density() * 100.0,
            path.display()
        );
        Ok(FinishedPage { page, path })
    }
}
