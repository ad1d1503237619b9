// huskylens/src/types.rs

//! Value types shared by the protocol and the device API.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From, Into};

use crate::Error;

/// Detection algorithm selected on the sensor. Encoded on the wire as a
/// little-endian u16.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Face recognition
    FaceRecognition = 0,
    /// Object tracking
    ObjectTracking = 1,
    /// Object recognition
    ObjectRecognition = 2,
    /// Reports arrows along the detected line
    LineTracking = 3,
    /// Colour recognition
    ColorRecognition = 4,
    /// AprilTag recognition
    TagRecognition = 5,
    /// Object classification
    ObjectClassification = 6,
}

impl Algorithm {
    /// Every algorithm, in selector order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::FaceRecognition,
        Algorithm::ObjectTracking,
        Algorithm::ObjectRecognition,
        Algorithm::LineTracking,
        Algorithm::ColorRecognition,
        Algorithm::TagRecognition,
        Algorithm::ObjectClassification,
    ];

    /// Selector value sent with set-algorithm
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Selector bytes sent as the set-algorithm payload
    pub fn to_le_bytes(self) -> [u8; 2] {
        self.code().to_le_bytes()
    }

    /// Kebab-case name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FaceRecognition => "face-recognition",
            Algorithm::ObjectTracking => "object-tracking",
            Algorithm::ObjectRecognition => "object-recognition",
            Algorithm::LineTracking => "line-tracking",
            Algorithm::ColorRecognition => "color-recognition",
            Algorithm::TagRecognition => "tag-recognition",
            Algorithm::ObjectClassification => "object-classification",
        }
    }
}

impl TryFrom<u16> for Algorithm {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.code() == code)
            .ok_or_else(|| Error::InvalidConfig(format!("unknown algorithm code {}", code)))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the kebab-case name, a short alias (`face`, `line`, `tag`, ...)
    /// or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(code) = s.parse::<u16>() {
            return Algorithm::try_from(code);
        }
        let alg = match s.as_str() {
            "face" | "face-recognition" => Algorithm::FaceRecognition,
            "track" | "object-tracking" => Algorithm::ObjectTracking,
            "object" | "object-recognition" => Algorithm::ObjectRecognition,
            "line" | "line-tracking" => Algorithm::LineTracking,
            "color" | "colour" | "color-recognition" | "colour-recognition" => {
                Algorithm::ColorRecognition
            }
            "tag" | "tag-recognition" => Algorithm::TagRecognition,
            "class" | "object-classification" => Algorithm::ObjectClassification,
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unknown algorithm '{}'",
                    other
                )));
            }
        };
        Ok(alg)
    }
}

/// Pixel coordinate pair reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[display(fmt = "({}, {})", x, y)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal pixel
    pub x: u16,
    /// Vertical pixel
    pub y: u16,
}

impl Point {
    /// Point at (`x`, `y`)
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Learned object id. Zero means the object has not been learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(u16);

impl ObjectId {
    /// Id reported for objects that were never learned
    pub const UNLEARNED: Self = Self(0);

    /// Wrap a raw id
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw id
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Payload encoding for the by-id requests
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// False for `UNLEARNED`
    pub fn is_learned(&self) -> bool {
        self.0 != 0
    }
}

/// Detection kind, selected by the command byte of the detection frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetectionKind {
    /// `start` is the box center, `end` holds width and height
    Block,
    /// `start` is the arrow origin, `end` the arrow target
    Arrow,
}

/// One detection decoded from a 16-byte response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Block or arrow
    pub kind: DetectionKind,
    /// Center (block) or origin (arrow)
    pub start: Point,
    /// Width/height (block) or target (arrow)
    pub end: Point,
    /// Learned id, 0 when unlearned
    pub id: ObjectId,
}

impl Detection {
    /// A block centred at `center` with `size` as width/height
    pub fn block(center: Point, size: Point, id: ObjectId) -> Self {
        Self {
            kind: DetectionKind::Block,
            start: center,
            end: size,
            id,
        }
    }

    /// An arrow from `origin` to `target`
    pub fn arrow(origin: Point, target: Point, id: ObjectId) -> Self {
        Self {
            kind: DetectionKind::Arrow,
            start: origin,
            end: target,
            id,
        }
    }

    /// True for blocks
    pub fn is_block(&self) -> bool {
        self.kind == DetectionKind::Block
    }

    /// True for arrows
    pub fn is_arrow(&self) -> bool {
        self.kind == DetectionKind::Arrow
    }

    /// Width and height of a block. `None` for arrows.
    pub fn size(&self) -> Option<(u16, u16)> {
        match self.kind {
            DetectionKind::Block => Some((self.end.x, self.end.y)),
            DetectionKind::Arrow => None,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DetectionKind::Block => write!(
                f,
                "block center={} size={}x{} id={}",
                self.start, self.end.x, self.end.y, self.id
            ),
            DetectionKind::Arrow => write!(
                f,
                "arrow {} -> {} id={}",
                self.start, self.end, self.id
            ),
        }
    }
}

/// Header announced by a return-info frame ahead of the detection frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoHeader {
    /// Number of detection frames that follow
    pub packet_count: u16,
    /// Number of learned ids
    pub id_count: u16,
    /// Sensor frame counter; 0 when the payload omits it
    pub frame_number: u16,
}

/// TransportKind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportKind {
    /// UART
    Serial,
    /// Linux I2C
    I2c,
    /// In-memory transport used by tests
    Mock,
}
