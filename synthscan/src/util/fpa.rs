use std::cmp::Ordering;

/// Page coordinate compared with a tolerance of `1e-4` (or 4 ulps), absorbing the rounding
/// of the centroid to bounding box conversion.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = 1e-4, ulps = 4)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

