use super::answers::{CaptureAngle, CaptureSet};

const BASE_CONFIDENCE: u8 = 72;
const SIDE_PROFILE_BONUS: u8 = 15;
const CLOSEUP_BONUS: u8 = 8;

/// Input-coverage estimate from which optional angles were supplied.
/// The front view is assumed and never changes the figure; the arithmetic
/// tops out at 95, so no explicit ceiling is applied.
pub fn estimate_confidence(captures: &CaptureSet) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if captures.contains(CaptureAngle::Left) && captures.contains(CaptureAngle::Right) {
        confidence += SIDE_PROFILE_BONUS;
    }

    if captures.contains(CaptureAngle::Closeup) {
        confidence += CLOSEUP_BONUS;
    }

    confidence
}
