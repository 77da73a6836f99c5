use handpose_base::Vec2;

/// Number of heatmap channels produced by the hand network
/// (21 hand landmarks plus one background channel)
pub const HAND_KEYPOINT_COUNT: usize = 22;

/// Integer pixel coordinate in the source image
pub type Point = Vec2<i32>;

/// Hand landmark indices, in heatmap channel order
///
/// Each finger is numbered from the knuckle nearest the wrist (1) to the
/// fingertip (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmark {
    Wrist = 0,
    Thumb1 = 1,
    Thumb2 = 2,
    Thumb3 = 3,
    Thumb4 = 4,
    Index1 = 5,
    Index2 = 6,
    Index3 = 7,
    Index4 = 8,
    Middle1 = 9,
    Middle2 = 10,
    Middle3 = 11,
    Middle4 = 12,
    Ring1 = 13,
    Ring2 = 14,
    Ring3 = 15,
    Ring4 = 16,
    Pinky1 = 17,
    Pinky2 = 18,
    Pinky3 = 19,
    Pinky4 = 20,
    Background = 21,
}

impl HandLandmark {
    pub const ALL: [HandLandmark; HAND_KEYPOINT_COUNT] = {
        use HandLandmark::*;
        [
            Wrist, Thumb1, Thumb2, Thumb3, Thumb4, Index1, Index2, Index3, Index4, Middle1,
            Middle2, Middle3, Middle4, Ring1, Ring2, Ring3, Ring4, Pinky1, Pinky2, Pinky3, Pinky4,
            Background,
        ]
    };
}

impl From<HandLandmark> for usize {
    fn from(landmark: HandLandmark) -> usize {
        landmark as usize
    }
}

impl TryFrom<usize> for HandLandmark {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        HandLandmark::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid hand landmark index: {}. Must be in range 0-{}.",
                value,
                HAND_KEYPOINT_COUNT - 1
            )
        })
    }
}

/// One optional pixel position per landmark, indexed by landmark
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keypoints(Vec<Option<Point>>);

impl Keypoints {
    pub fn new(points: Vec<Option<Point>>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of landmark `index`, `None` if it was not detected or is out of range.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.0.get(index).copied().flatten()
    }

    pub fn landmark(&self, landmark: HandLandmark) -> Option<Point> {
        self.get(usize::from(landmark))
    }

    pub fn as_slice(&self) -> &[Option<Point>] {
        &self.0
    }

    /// Detected landmarks as `(index, position)`, in landmark order.
    pub fn detected(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.map(|p| (index, p)))
    }

    pub fn detected_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_some()).count()
    }
}

impl From<Vec<Option<Point>>> for Keypoints {
    fn from(points: Vec<Option<Point>>) -> Self {
        Self(points)
    }
}

/// A skeleton line between two detected landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Landmark index of `start`
    pub from: usize,
    /// Landmark index of `end`
    pub to: usize,
    pub start: Point,
    pub end: Point,
}

/// Result of running the hand pose pipeline on one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandPose {
    pub keypoints: Keypoints,
    pub skeleton: Vec<Segment>,
}
