//! Plot geometry for the SVG charts.
//!
//! Band scale on x (one slot per period), linear scale from zero on y. The
//! frontend only turns these numbers into SVG attributes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Outer size and margins of a chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl ChartFrame {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Evenly sized slots across the plot width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    count: usize,
}

impl BandScale {
    pub fn new(frame: &ChartFrame, count: usize) -> Self {
        let step = if count == 0 {
            0.0
        } else {
            frame.plot_width() / count as f64
        };
        Self {
            start: frame.plot_left(),
            step,
            count,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn slot_start(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn slot_end(&self, index: usize) -> f64 {
        self.slot_start(index) + self.step
    }

    pub fn center(&self, index: usize) -> f64 {
        self.slot_start(index) + self.step / 2.0
    }

    /// Slot under an x coordinate, if any.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        if self.step <= 0.0 || x < self.start {
            return None;
        }
        let index = ((x - self.start) / self.step).floor() as usize;
        (index < self.count).then_some(index)
    }
}

/// Maps amounts onto the vertical axis, zero at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: f64,
    top: f64,
    bottom: f64,
}

impl LinearScale {
    pub fn new(frame: &ChartFrame, max: f64) -> Self {
        Self {
            max: if max > 0.0 { max } else { 1.0 },
            top: frame.plot_top(),
            bottom: frame.plot_bottom(),
        }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn y(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, self.max);
        self.bottom - (clamped / self.max) * (self.bottom - self.top)
    }

    pub fn bar_height(&self, value: f64) -> f64 {
        self.bottom - self.y(value)
    }
}

/// Rounds `max` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `intervals + 1` evenly spaced tick values from zero to `max`.
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return vec![0.0];
    }
    (0..=intervals)
        .map(|i| max * i as f64 / intervals as f64)
        .collect()
}

pub fn to_plot_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

/// Back-conversion for tick labels, which go through the Decimal formatters.
pub fn to_amount(value: f64) -> Decimal {
    Decimal::from_f64_retain(value.round()).unwrap_or(Decimal::ZERO)
}

/// Closed area path under a polyline, down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut path = format!("M {} {}", first.0, baseline);
    for (x, y) in points {
        path.push_str(&format!(" L {} {}", x, y));
    }
    path.push_str(&format!(" L {} {} Z", last.0, baseline));
    path
}

/// SVG path for a bar with rounded top corners.
pub fn rounded_top_bar(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let r = radius.min(width / 2.0).min(height).max(0.0);
    let bottom = y + height;
    format!(
        "M {x} {bottom} L {x} {top} Q {x} {y} {xr} {y} L {xw_r} {y} Q {xw} {y} {xw} {top} L {xw} {bottom} Z",
        x = x,
        y = y,
        bottom = bottom,
        top = y + r,
        xr = x + r,
        xw_r = x + width - r,
        xw = x + width,
    )
}
