use crate::InferError;

/// Which landmark pairs are joined by a skeleton line, in drawing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonTopology {
    pairs: Vec<(usize, usize)>,
}

const HAND_PAIRS: [(usize, usize); 20] = [
    // Thumb
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    // Index
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    // Middle
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    // Ring
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    // Pinky
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

impl SkeletonTopology {
    pub fn new(pairs: Vec<(usize, usize)>) -> Self {
        Self { pairs }
    }

    /// Wrist-to-fingertip chains for the five fingers.
    pub fn hand() -> Self {
        Self::new(HAND_PAIRS.to_vec())
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check that every pair references a landmark below `keypoint_count`.
    pub fn validate(&self, keypoint_count: usize) -> Result<(), InferError> {
        match self
            .pairs
            .iter()
            .find(|(a, b)| *a >= keypoint_count || *b >= keypoint_count)
        {
            Some((a, b)) => Err(InferError::Config(format!(
                "topology pair ({}, {}) references a landmark outside 0..{}",
                a, b, keypoint_count
            ))),
            None => Ok(()),
        }
    }
}

impl Default for SkeletonTopology {
    fn default() -> Self {
        Self::hand()
    }
}

impl From<&[[usize; 2]]> for SkeletonTopology {
    fn from(pairs: &[[usize; 2]]) -> Self {
        Self::new(pairs.iter().map(|&[a, b]| (a, b)).collect())
    }
}
