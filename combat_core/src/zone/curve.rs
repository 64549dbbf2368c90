//! Piecewise cubic smoothstep curves through fixed anchor points

/// Cubic ease: `t²(3 − 2t)`, with `t` clamped to [0, 1]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A curve defined by `(x, y)` anchors sorted by `x`
///
/// Below the first anchor the curve holds the first `y`; above the last it
/// holds the last `y`. Between two anchors it eases with [`smoothstep`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorCurve {
    anchors: &'static [(f64, f64)],
}

/// Zone 1 ("Perfect") probability by accuracy
pub const PERFECT_CURVE: AnchorCurve = AnchorCurve::new(&[
    (0.05, 0.02),
    (0.25, 0.20),
    (0.50, 0.50),
    (1.00, 0.95),
]);

/// Zone 2 ("Great") probability by accuracy
pub const GREAT_CURVE: AnchorCurve = AnchorCurve::new(&[
    (0.00, 0.45),
    (0.05, 0.50),
    (0.25, 0.58),
    (0.50, 0.45),
    (1.00, 0.05),
]);

impl AnchorCurve {
    /// Wrap a sorted, non-empty anchor list
    pub const fn new(anchors: &'static [(f64, f64)]) -> Self {
        AnchorCurve { anchors }
    }

    /// Anchor points of this curve
    pub fn anchors(&self) -> &'static [(f64, f64)] {
        self.anchors
    }

    /// Evaluate the curve at `x`
    pub fn eval(&self, x: f64) -> f64 {
        let (first, last) = match (self.anchors.first(), self.anchors.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        for pair in self.anchors.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * smoothstep(t);
            }
        }
        last.1
    }
}
