//! Inbound configuration messages from the paired phone app.
//!
//! The transport delivers a dictionary of optional fields; only the
//! longitude field is acted on here. It arrives as a signed fixed-point
//! integer, degrees scaled by 10^7, and is converted to `f64` degrees
//! on receipt. A message without the field is ignored, not an error.

/// Fixed-point scale of the longitude field: raw value = degrees × 10^7.
pub const LONGITUDE_SCALE: f64 = 1e7;

/// Decoded configuration payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    /// East-positive longitude, degrees × 10^7, if the field was present.
    pub longitude_raw: Option<i32>,
}

impl ConfigMessage {
    pub fn with_longitude_raw(raw: i32) -> Self {
        Self {
            longitude_raw: Some(raw),
        }
    }

    /// Longitude in degrees, if the message carried the field.
    pub fn longitude_deg(&self) -> Option<f64> {
        self.longitude_raw.map(|raw| raw as f64 / LONGITUDE_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixed_point_degrees() {
        // ATCA: raw 1495501388 → 149.5501388°E
        let msg = ConfigMessage::with_longitude_raw(1_495_501_388);
        let deg = msg.longitude_deg().unwrap();
        assert!((deg - 149.550_138_8).abs() < 1e-9, "got {deg}");
    }

    #[test]
    fn decodes_western_longitude() {
        let msg = ConfigMessage::with_longitude_raw(-704_041_670);
        let deg = msg.longitude_deg().unwrap();
        assert!((deg + 70.404_167).abs() < 1e-9, "got {deg}");
    }

    #[test]
    fn absent_field_decodes_to_none() {
        let msg = ConfigMessage::default();
        assert_eq!(msg.longitude_deg(), None);
    }
}
