/// Extension trait for `u32` to provide f32 conversion for texture-scale values
pub trait U32Ext {
    /// Converts `u32` to `f32` (exact for values < 16 million)
    fn to_f32(self) -> f32;
}

impl U32Ext for u32 {
    #[inline]
    #[allow(clippy::cast_precision_loss, reason = "texture dimensions stay far below 2^24")]
    fn to_f32(self) -> f32 { self as f32 }
}

/// Extension trait for `f32` to pack normalized values into 8-bit channels
pub trait UnitF32Ext {
    /// Clamps to [0, 1] and scales to a `u8` channel, NaN maps to 0
    fn to_channel(self) -> u8;
}

impl UnitF32Ext for f32 {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to [0, 255] before the cast"
    )]
    fn to_channel(self) -> u8 {
        if self.is_nan() {
            return 0;
        }
        (self.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}
