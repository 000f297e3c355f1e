use itertools::{Itertools, MinMaxResult};

use crate::number::Number;
use crate::parser::Node;
use crate::{evaluate, parse_expression};

const X_MIN: i64 = -100;
const X_MAX: i64 = 100;
const WIDTH: usize = 72;
const HEIGHT: usize = 20;
const MARGIN: usize = 9;

/// One evaluation per integer x in `[-100, 100)`, reusing the parsed
/// tree. Samples that hit a division by zero, or whose value is not a
/// finite float, are dropped; the rest are kept.
fn sample(node: &Node) -> Vec<(i64, f64)> {
    let mut points = vec![];

    for x in X_MIN..X_MAX {
        if let Ok(y) = evaluate(node, Some(Number::Int(x))) {
            let y = y.as_f64();
            if y.is_finite() {
                points.push((x, y));
            }
        }
    }

    points
}

/// Samples `expr` over the x range and renders the curve as a character
/// grid. `None` means the expression is malformed or no sample produced
/// a plottable value.
pub fn render(expr: &str) -> Option<String> {
    let node = parse_expression(expr)?;
    let points = sample(&node);

    let (mut lo, mut hi) = match points.iter().map(|&(_, y)| y).minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(y) => (y, y),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    // flat curves still need a nonzero y-span to scale against
    if hi - lo < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }

    let mut grid = vec![[' '; WIDTH]; HEIGHT];
    let x_span = (X_MAX - 1 - X_MIN) as f64;

    for &(x, y) in &points {
        let col = ((x - X_MIN) as f64 / x_span * (WIDTH - 1) as f64).round() as usize;
        let row = ((hi - y) / (hi - lo) * (HEIGHT - 1) as f64).round() as usize;
        grid[row][col] = '*';
    }

    let mut out = format!("y={}\n", expr);

    for (i, row) in grid.iter().enumerate() {
        let label = match i {
            0 => format!("{:>w$.2}", hi, w = MARGIN),
            _ if i == HEIGHT - 1 => format!("{:>w$.2}", lo, w = MARGIN),
            _ => " ".repeat(MARGIN),
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{} |{}\n", label, line.trim_end()));
    }

    out.push_str(&format!("{} +{}\n", " ".repeat(MARGIN), "-".repeat(WIDTH)));

    let left = X_MIN.to_string();
    let right = (X_MAX - 1).to_string();
    out.push_str(&format!(
        "{}{}{:>pad$}\n",
        " ".repeat(MARGIN + 2),
        left,
        right,
        pad = WIDTH - left.len()
    ));

    Some(out)
}

#[cfg(test)]
mod test {
    use super::{render, sample};
    use crate::parse_expression;

    #[test]
    fn test_renders_a_curve() {
        let plot = render("x*x").unwrap();
        assert!(plot.starts_with("y=x*x\n"));
        assert!(plot.contains('*'));
    }

    #[test]
    fn test_malformed_expression() {
        assert_eq!(render("x~2"), None);
        assert_eq!(render(""), None);
    }

    #[test]
    fn test_division_by_zero_samples_skipped() {
        // 100/x blows up at x=0; exactly that sample is dropped and the
        // other 199 survive
        let node = parse_expression("100/x").unwrap();
        let points = sample(&node);
        assert_eq!(points.len(), 199);
        assert!(points.iter().all(|&(x, _)| x != 0));
        assert!(render("100/x").is_some());
    }

    #[test]
    fn test_no_plottable_samples() {
        // every sample divides by zero
        assert_eq!(render("1/(x-x)"), None);
    }

    #[test]
    fn test_flat_curve() {
        // constant expressions plot on a padded y-range
        assert!(render("3").is_some());
    }
}
