use crate::capture::surface::{Surface, SurfaceHandle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable key for one contact during its lifetime
///
/// Hosts usually report numeric ids; they are stringified so that every
/// source keys the cache the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawPointerId", into = "String")]
pub struct PointerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPointerId {
    Number(i64),
    Text(String),
}

impl From<RawPointerId> for PointerId {
    fn from(raw: RawPointerId) -> Self {
        match raw {
            RawPointerId::Number(n) => PointerId(n.to_string()),
            RawPointerId::Text(s) => PointerId(s),
        }
    }
}

impl From<PointerId> for String {
    fn from(id: PointerId) -> Self {
        id.0
    }
}

impl From<&str> for PointerId {
    fn from(id: &str) -> Self {
        PointerId(id.to_string())
    }
}

impl From<String> for PointerId {
    fn from(id: String) -> Self {
        PointerId(id)
    }
}

impl From<i32> for PointerId {
    fn from(id: i32) -> Self {
        PointerId(id.to_string())
    }
}

impl PointerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pointer lifecycle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerTag {
    Cancel,
    Down,
    Enter,
    Leave,
    Move,
    Out,
    Over,
    Up,
}

impl fmt::Display for PointerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerTag::Cancel => write!(f, "pointercancel"),
            PointerTag::Down => write!(f, "pointerdown"),
            PointerTag::Enter => write!(f, "pointerenter"),
            PointerTag::Leave => write!(f, "pointerleave"),
            PointerTag::Move => write!(f, "pointermove"),
            PointerTag::Out => write!(f, "pointerout"),
            PointerTag::Over => write!(f, "pointerover"),
            PointerTag::Up => write!(f, "pointerup"),
        }
    }
}

/// Raw per-instant readings of one pointer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerSample {
    /// Milliseconds, in whatever clock the host uses
    pub time_stamp: f64,
    pub client_x: f64,
    pub client_y: f64,
    pub pressure: f64,
    pub tangential_pressure: f64,
    /// Contact geometry in pixels
    pub width: f64,
    pub height: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub twist: f64,
}

impl PointerSample {
    /// Sample at a client position with every other reading zeroed
    pub fn at(time_stamp: f64, client_x: f64, client_y: f64) -> Self {
        Self {
            time_stamp,
            client_x,
            client_y,
            ..Default::default()
        }
    }

    pub fn contact_area(&self) -> f64 {
        self.width * self.height
    }
}

/// One tagged observation of a pointer against a surface
///
/// Immutable once recorded; tracks share these by reference.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub tag: PointerTag,
    pub surface: SurfaceHandle,
    pub sample: PointerSample,
}

impl PointerEvent {
    pub fn new(
        pointer_id: impl Into<PointerId>,
        tag: PointerTag,
        surface: SurfaceHandle,
        sample: PointerSample,
    ) -> Self {
        Self {
            pointer_id: pointer_id.into(),
            tag,
            surface,
            sample,
        }
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}
