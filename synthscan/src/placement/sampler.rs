use rand::Rng;

/// Samples integer-valued centroids uniformly over the full extent of a page,
/// bounds included.
#[derive(Clone, Copy, Debug)]
pub struct UniformCentroidSampler {
    pub x_max: u32,
    pub y_max: u32,
}

impl UniformCentroidSampler {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            x_max: page_width.max(0.0) as u32,
            y_max: page_height.max(0.0) as u32,
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> (f32, f32) {
        let x = rng.random_range(0..=self.x_max);
        let y = rng.random_range(0..=self.y_max);
        (x as f32, y as f32)
    }
}
