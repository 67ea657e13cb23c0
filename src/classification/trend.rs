use crate::classification::band::{DesaturationTrend, TrendReading};

const HEALTHY_SIGNIFICANT_DROP: f64 = 3.0;
const COPD_SIGNIFICANT_DROP: f64 = 4.0;

/// Drop (percentage points) at which desaturation counts as significant.
pub fn significant_drop_threshold(has_copd: Option<bool>) -> f64 {
    if has_copd == Some(true) {
        COPD_SIGNIFICANT_DROP
    } else {
        HEALTHY_SIGNIFICANT_DROP
    }
}

/// Compare a pre- and post-exercise SpO2 reading.
///
/// `oxygen_on` is accepted but does not affect the result yet.
pub fn classify_trend(
    pre_spo2: Option<f64>,
    post_spo2: Option<f64>,
    has_copd: Option<bool>,
    _oxygen_on: Option<bool>,
) -> Option<TrendReading> {
    let pre = pre_spo2.filter(|v| !v.is_nan())?;
    let post = post_spo2.filter(|v| !v.is_nan())?;

    let drop = pre - post;
    // inf - inf
    if drop.is_nan() {
        return None;
    }

    let trend = if drop >= significant_drop_threshold(has_copd) {
        DesaturationTrend::Significant
    } else if drop > 0.0 {
        DesaturationTrend::Mild
    } else {
        DesaturationTrend::Improved
    };

    Some(TrendReading { trend, drop })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(pre: f64, post: f64, has_copd: Option<bool>) -> DesaturationTrend {
        classify_trend(Some(pre), Some(post), has_copd, None)
            .expect("numeric readings always classify")
            .trend
    }

    #[test]
    fn missing_side_has_no_trend() {
        assert_eq!(classify_trend(None, Some(90.0), None, None), None);
        assert_eq!(classify_trend(Some(90.0), None, None, None), None);
        assert_eq!(classify_trend(Some(f64::NAN), Some(90.0), None, None), None);
    }

    #[test]
    fn healthy_threshold_is_three_points() {
        assert_eq!(trend(97.0, 94.0, Some(false)), DesaturationTrend::Significant);
        assert_eq!(trend(97.0, 95.0, Some(false)), DesaturationTrend::Mild);
        assert_eq!(trend(97.0, 97.0, None), DesaturationTrend::Improved);
        assert_eq!(trend(95.0, 97.0, None), DesaturationTrend::Improved);
    }

    #[test]
    fn copd_threshold_is_four_points() {
        assert_eq!(trend(93.0, 89.0, Some(true)), DesaturationTrend::Significant);
        assert_eq!(trend(93.0, 90.0, Some(true)), DesaturationTrend::Mild);
    }

    #[test]
    fn drop_is_reported() {
        let reading = classify_trend(Some(94.0), Some(89.5), Some(true), Some(true)).unwrap();
        assert_eq!(reading.drop, 4.5);
        assert_eq!(reading.trend, DesaturationTrend::Significant);
    }

    #[test]
    fn oxygen_status_does_not_change_trend() {
        for oxygen_on in [None, Some(false), Some(true)] {
            let r = classify_trend(Some(96.0), Some(93.0), Some(false), oxygen_on).unwrap();
            assert_eq!(r.trend, DesaturationTrend::Significant);
        }
    }
}
