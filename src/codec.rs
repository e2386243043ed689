// Conversion between wiper codes and end-to-end resistance. Pure math, no
// bus traffic; the driver layers the I2C transactions on top of this.

use crate::error::OutOfRange;

// Digipot parameters
/// Number of wiper positions per channel.
pub const WIPER_POSITIONS: u16 = 256;
/// Measured end-to-end resistance of the 1k part, in ohms. Boards with a
/// different R_AB variant override this per driver instance.
pub const R_AB_OHMS: f32 = 1080.0;

/// Resistance seen at a wiper code. Lower codes mean more resistance; code 0
/// is the full element.
pub fn code_to_resistance(code: u8, r_ab_ohms: f32) -> f32 {
    (WIPER_POSITIONS - code as u16) as f32 / WIPER_POSITIONS as f32 * r_ab_ohms
}

/// Wiper code whose resistance is closest to `ohms` from below, i.e. the
/// requested value truncated to the chip's 256 step grid.
///
/// Requests outside `[0, r_ab_ohms]` (and NaN) are refused. A request under
/// one step snaps to code 255, the smallest resistance the chip can produce.
pub fn resistance_to_code(ohms: f32, r_ab_ohms: f32) -> Result<u8, OutOfRange> {
    if !(0.0..=r_ab_ohms).contains(&ohms) {
        return Err(OutOfRange(ohms));
    }
    // In [0, 256]; u16 so that a full-scale request comes out as code 0
    // rather than wrapping.
    let steps = (ohms * WIPER_POSITIONS as f32 / r_ab_ohms) as u16;
    if steps == 0 {
        return Ok(255);
    }
    Ok((WIPER_POSITIONS - steps) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_each_code_back_to_itself() {
        for code in 0..=255u8 {
            let ohms = code_to_resistance(code, R_AB_OHMS);
            assert_eq!(resistance_to_code(ohms, R_AB_OHMS), Ok(code));
        }
    }

    #[test]
    fn resistance_falls_as_code_rises() {
        for code in 1..=255u8 {
            assert!(code_to_resistance(code, R_AB_OHMS) < code_to_resistance(code - 1, R_AB_OHMS));
        }
    }

    #[test]
    fn code_zero_is_the_full_element() {
        assert_eq!(code_to_resistance(0, R_AB_OHMS), R_AB_OHMS);
    }

    #[test]
    fn last_code_is_one_step_above_zero() {
        assert_eq!(code_to_resistance(255, R_AB_OHMS), R_AB_OHMS / 256.0);
    }

    #[test]
    fn five_hundred_ohm_lands_on_code_138() {
        // 500 * 256 / 1080 truncates to 118 steps, so the code is 256 - 118.
        assert_eq!(resistance_to_code(500.0, R_AB_OHMS), Ok(138));
    }

    #[test]
    fn sub_step_requests_snap_to_minimum_resistance() {
        assert_eq!(resistance_to_code(0.0, R_AB_OHMS), Ok(255));
        assert_eq!(resistance_to_code(2.0, R_AB_OHMS), Ok(255));
    }

    #[test]
    fn rejects_out_of_range_requests() {
        assert_eq!(resistance_to_code(-1.0, R_AB_OHMS), Err(OutOfRange(-1.0)));
        assert_eq!(
            resistance_to_code(R_AB_OHMS + 1.0, R_AB_OHMS),
            Err(OutOfRange(R_AB_OHMS + 1.0))
        );
        assert!(resistance_to_code(f32::NAN, R_AB_OHMS).is_err());
    }

    #[test]
    fn other_r_ab_variants_scale_the_mapping() {
        assert_eq!(resistance_to_code(500.0, 1000.0), Ok(128));
        assert_eq!(code_to_resistance(128, 1000.0), 500.0);
    }
}
