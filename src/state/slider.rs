pub const DEFAULT_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: DEFAULT_STEP,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// An inverted range pins every value to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.max < self.min {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Share of the track left of the thumb, in percent.
    pub fn fill_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span * 100.0
    }

    /// Decimal places implied by the step: `0.01` gives 2, `1` gives 0.
    pub fn precision(&self) -> usize {
        if self.step >= 1.0 {
            return 0;
        }
        let text = self.step.to_string();
        text.split_once('.').map_or(0, |(_, fraction)| fraction.len())
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision(), value)
    }
}

pub fn parse_slider_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Stable element id so server and client markup agree.
pub fn slider_id(id: Option<&str>, label: Option<&str>) -> String {
    if let Some(id) = id {
        return id.to_string();
    }
    match label {
        Some(label) => {
            let slug = label
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-");
            format!("slider-{slug}")
        }
        None => "slider-default".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ValueSource;

    #[test]
    fn fill_percent_is_linear_in_value() {
        let range = SliderRange::new(0.0, 2.0).with_step(0.01);
        assert_eq!(range.fill_percent(0.0), 0.0);
        assert_eq!(range.fill_percent(0.5), 25.0);
        assert_eq!(range.fill_percent(2.0), 100.0);

        let tokens = SliderRange::new(1.0, 4097.0).with_step(1.0);
        assert_eq!(tokens.fill_percent(2049.0), 50.0);
    }

    #[test]
    fn degenerate_range_has_no_fill() {
        assert_eq!(SliderRange::new(3.0, 3.0).fill_percent(3.0), 0.0);
    }

    #[test]
    fn inverted_range_clamps_to_min() {
        let range = SliderRange::new(1.0, 0.0).with_step(1.0);
        assert_eq!(range.clamp(10.0), 1.0);
        assert_eq!(range.clamp(-3.0), 1.0);
        assert_eq!(SliderRange::new(0.0, 2.0).clamp(2.5), 2.0);
    }

    #[test]
    fn precision_follows_step() {
        assert_eq!(SliderRange::new(0.0, 1.0).precision(), 1);
        assert_eq!(SliderRange::new(0.0, 1.0).with_step(0.01).precision(), 2);
        assert_eq!(SliderRange::new(0.0, 1.0).with_step(0.005).precision(), 3);
        assert_eq!(SliderRange::new(0.0, 10.0).with_step(1.0).precision(), 0);
        assert_eq!(SliderRange::new(0.0, 10.0).with_step(5.0).precision(), 0);
    }

    #[test]
    fn display_rounds_to_step_precision() {
        let range = SliderRange::new(0.0, 2.0).with_step(0.01);
        assert_eq!(range.format(0.7), "0.70");
        assert_eq!(range.format(1.234), "1.23");

        let tokens = SliderRange::new(1.0, 4096.0).with_step(1.0);
        assert_eq!(tokens.format(2048.0), "2048");
    }

    #[test]
    fn id_derives_from_label() {
        assert_eq!(slider_id(None, Some("Max Tokens")), "slider-max-tokens");
        assert_eq!(slider_id(None, Some("Top  P")), "slider-top-p");
        assert_eq!(slider_id(Some("custom"), Some("Top P")), "custom");
        assert_eq!(slider_id(None, None), "slider-default");
    }

    #[test]
    fn parses_range_input() {
        assert_eq!(parse_slider_input("0.25"), Some(0.25));
        assert_eq!(parse_slider_input(" 12 "), Some(12.0));
        assert_eq!(parse_slider_input("abc"), None);
        assert_eq!(parse_slider_input("NaN"), None);
    }

    #[test]
    fn uncontrolled_slider_starts_at_min() {
        let range = SliderRange::new(0.5, 2.0);
        let source = ValueSource::owned_or(None, range.min);
        assert_eq!(source.seed(), 0.5);
    }

    #[test]
    fn controlled_slider_keeps_parent_value_on_input() {
        let source = ValueSource::External(0.7);
        let mut local = source.seed();
        let reported = parse_slider_input("1.1").unwrap();
        source.commit(&mut local, reported);
        assert_eq!(reported, 1.1);
        assert_eq!(source.resolve(&local), 0.7);
    }
}
