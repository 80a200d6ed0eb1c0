//! Text listings of chain vertices.

use crate::core::Chain;
use std::fmt::Write;

/// One line per vertex, 1-based, two decimals:
///
/// ```text
/// V1: (-3.00, -2.00)
/// V2: (0.00, 0.00)
/// ```
pub fn format_vertices(chain: &Chain) -> String {
    let mut out = String::new();
    for (i, p) in chain.points().iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "V{}: ({:.2}, {:.2})", i + 1, p.x, p.y);
    }
    out
}

/// `x [min, max]  y [min, max]` with two decimals.
pub fn format_bounds(chain: &Chain) -> String {
    let (min, max) = chain.bounds();
    format!(
        "x [{:.2}, {:.2}]  y [{:.2}, {:.2}]",
        min.x, max.x, min.y, max.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vertices() {
        let chain = Chain::from_coords(&[[-3.0, -2.0], [0.004, 1.0 / 3.0], [7.0, 8.5]]).unwrap();
        let text = format_vertices(&chain);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["V1: (-3.00, -2.00)", "V2: (0.00, 0.33)", "V3: (7.00, 8.50)"]
        );
    }

    #[test]
    fn test_format_bounds() {
        let chain = Chain::from_coords(&[[-10.0, -10.0], [3.0, 12.5], [10.0, 10.0]]).unwrap();
        assert_eq!(format_bounds(&chain), "x [-10.00, 10.00]  y [-10.00, 12.50]");
    }
}
