//! Typed values extracted from table bodies

use serde::Serialize;

/// Identity rotation entries used to fill missing frame orientation slots.
const IDENTITY_ORIENTATION: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Non-frame constructor names recognized inside table bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VectorKind {
    Vector2,
    Vector3,
    Color3,
}

impl VectorKind {
    /// Maps a constructor identifier to its kind. Unrecognized names return
    /// `None` and the surrounding `key = Name.new(...)` is left unparsed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Vector2" => Some(VectorKind::Vector2),
            "Vector3" => Some(VectorKind::Vector3),
            "Color3" => Some(VectorKind::Color3),
            _ => None,
        }
    }
}

/// A recognized vector or color constructor with its ordered arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorValue {
    pub kind: VectorKind,
    pub components: Vec<f64>,
}

/// A frame constructor split into a position and a 3x3 orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameValue {
    pub position: [f64; 3],
    pub orientation: [f64; 9],
}

impl FrameValue {
    /// Builds a frame from constructor arguments.
    ///
    /// The first three arguments are the position; the rest fill the
    /// orientation slots in order, each missing slot keeping its identity
    /// rotation entry.
    pub fn from_args(args: &[f64]) -> Self {
        let mut position = [0.0; 3];
        for (slot, arg) in position.iter_mut().zip(args.iter()) {
            *slot = *arg;
        }

        let mut orientation = IDENTITY_ORIENTATION;
        for (slot, arg) in orientation.iter_mut().zip(args.iter().skip(3)) {
            *slot = *arg;
        }

        FrameValue { position, orientation }
    }
}

/// One value of a flat table body.
///
/// Serializes untagged: scalars stay plain, a frame becomes
/// `{position, orientation}`, any other constructor becomes
/// `{kind, components}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Vector(VectorValue),
    Frame(FrameValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_full_args() {
        let args: Vec<f64> = (1..=12).map(f64::from).collect();
        let frame = FrameValue::from_args(&args);
        assert_eq!(frame.position, [1.0, 2.0, 3.0]);
        assert_eq!(
            frame.orientation,
            [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn test_frame_position_only() {
        let frame = FrameValue::from_args(&[1.0, 2.0, 3.0]);
        assert_eq!(frame.position, [1.0, 2.0, 3.0]);
        assert_eq!(frame.orientation, IDENTITY_ORIENTATION);
    }

    #[test]
    fn test_frame_partial_orientation() {
        // Slots beyond the supplied arguments keep their identity entries.
        let frame = FrameValue::from_args(&[0.0, 0.0, 0.0, 0.5, 0.5]);
        assert_eq!(
            frame.orientation,
            [0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_vector_kind_from_name() {
        assert_eq!(VectorKind::from_name("Vector3"), Some(VectorKind::Vector3));
        assert_eq!(VectorKind::from_name("Vector2"), Some(VectorKind::Vector2));
        assert_eq!(VectorKind::from_name("Color3"), Some(VectorKind::Color3));
        assert_eq!(VectorKind::from_name("Ray"), None);
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&TypedValue::Num(105.0)).unwrap();
        assert_eq!(json, "105.0");

        let json = serde_json::to_string(&TypedValue::Str("APCR".into())).unwrap();
        assert_eq!(json, "\"APCR\"");

        let json = serde_json::to_string(&TypedValue::Bool(true)).unwrap();
        assert_eq!(json, "true");

        let frame = TypedValue::Frame(FrameValue::from_args(&[1.0, 2.0, 3.0]));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["position"], serde_json::json!([1.0, 2.0, 3.0]));
        assert_eq!(json["orientation"][0], 1.0);

        let vector = TypedValue::Vector(VectorValue {
            kind: VectorKind::Vector3,
            components: vec![0.0, 1.0, 0.0],
        });
        let json = serde_json::to_value(&vector).unwrap();
        assert_eq!(json["kind"], "Vector3");
        assert_eq!(json["components"], serde_json::json!([0.0, 1.0, 0.0]));
    }
}
