use serde::{Deserialize, Serialize};

/// Configuration of the grid search used when a random centroid is rejected
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GridSearchConfig {
    /// Distance kept free between the image and the page edges
    pub margin: f32,
    /// Distance between two consecutive candidate centroids in the first scan
    pub initial_step: u32,
    /// The step is halved and the scan repeated for as long as the step exceeds this value
    pub min_step: u32,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            initial_step: 50,
            min_step: 10,
        }
    }
}

/// Configuration of the [`PagePacker`](crate::packing::PagePacker)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig {
    /// Number of (re-rendered) attempts per item before the page is considered full
    pub n_attempts: usize,
    pub grid_search: GridSearchConfig,
    /// Maximum number of consecutive page rollovers caused by a single item.
    /// If undefined, the packer keeps opening new pages until the item fits.
    pub max_rollovers_per_item: Option<usize>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            n_attempts: 15,
            grid_search: GridSearchConfig::default(),
            max_rollovers_per_item: Some(8),
        }
    }
}
