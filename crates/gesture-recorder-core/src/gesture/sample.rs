use serde::{Serialize, Serializer, ser::SerializeTuple};

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One captured pointer observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal pointer position in canvas space.
    pub x: f64,
    /// Vertical pointer position in canvas space.
    pub y: f64,
    /// Milliseconds since the owning gesture began.
    pub elapsed_ms: u64,
}

impl Sample {
    /// Create a sample at `(x, y)` taken `elapsed_ms` into the gesture.
    pub fn new(x: f64, y: f64, elapsed_ms: u64) -> Self {
        Self { x, y, elapsed_ms }
    }
}

/// Serializes as the 3-element array `[x, y, elapsed_ms]`.
impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&Coordinate(self.x))?;
        tuple.serialize_element(&Coordinate(self.y))?;
        tuple.serialize_element(&self.elapsed_ms)?;
        tuple.end()
    }
}

/// Canvas coordinate written the way a JavaScript number would be:
/// whole values without a fractional part.
struct Coordinate(f64);

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            // serde_json writes non-finite floats as null.
            serializer.serialize_f64(value)
        }
    }
}
