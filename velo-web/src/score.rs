//! Bucketing availability ratios into marker colors.

/// Marker color bucket for a station's availability ratio.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreColor {
    Red,
    Orange,
    Green,
    Purple
}

impl ScoreColor {
    /// Buckets a ratio by the fixed thresholds: under 0.15 is `Red`, then
    /// `Orange` up to 0.35, `Green` up to 0.70, and `Purple` for
    /// everything else.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.15 {
            ScoreColor::Red
        }
        else if ratio < 0.35 {
            ScoreColor::Orange
        }
        else if ratio < 0.70 {
            ScoreColor::Green
        }
        else {
            ScoreColor::Purple
        }
    }
    /// The CSS color name Leaflet gets for this bucket.
    pub fn css_name(&self) -> &'static str {
        match *self {
            ScoreColor::Red => "red",
            ScoreColor::Orange => "orange",
            ScoreColor::Green => "green",
            ScoreColor::Purple => "purple"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreColor::{self, *};

    #[test]
    fn threshold_bands() {
        assert_eq!(ScoreColor::from_ratio(0.0), Red);
        assert_eq!(ScoreColor::from_ratio(0.1), Red);
        assert_eq!(ScoreColor::from_ratio(0.2), Orange);
        assert_eq!(ScoreColor::from_ratio(0.34), Orange);
        assert_eq!(ScoreColor::from_ratio(0.5), Green);
        assert_eq!(ScoreColor::from_ratio(0.69), Green);
        assert_eq!(ScoreColor::from_ratio(0.9), Purple);
        assert_eq!(ScoreColor::from_ratio(1.0), Purple);
    }

    #[test]
    fn boundaries_land_in_the_upper_band() {
        assert_eq!(ScoreColor::from_ratio(0.15), Orange);
        assert_eq!(ScoreColor::from_ratio(0.35), Green);
        assert_eq!(ScoreColor::from_ratio(0.70), Purple);
    }

    #[test]
    fn out_of_domain_ratios_hit_the_open_bands() {
        assert_eq!(ScoreColor::from_ratio(-0.5), Red);
        assert_eq!(ScoreColor::from_ratio(3.0), Purple);
        // capacity-zero stations divide to NaN, which no band bound catches
        assert_eq!(ScoreColor::from_ratio(std::f64::NAN), Purple);
    }

    #[test]
    fn color_names_are_leaflet_safe() {
        assert_eq!(Red.css_name(), "red");
        assert_eq!(Orange.css_name(), "orange");
        assert_eq!(Green.css_name(), "green");
        assert_eq!(Purple.css_name(), "purple");
    }
}
