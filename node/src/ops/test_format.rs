#[cfg(test)]
use crate::{Node, Quad};
use crate::{Raster, Value};

// macros make formatting nicer

/// this has very little error handling, must be a square with side length a power of 2
#[macro_export]
macro_rules! test_raster {
    {$s:literal} => {
        $crate::Raster::from_test_format($s)
    };
}

impl Raster {
    /// expects rows of whitespace separated values, one row per line
    /// first line may be empty, leading/trailing spaces are ignored
    pub fn from_test_format(s: &str) -> Raster {
        let rows: Vec<Vec<Value>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_row)
            .collect();
        let side = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == side),
            "rows must all be {side} wide"
        );
        Raster::new(rows.concat()).expect("power of two square")
    }
}

/// a single split whose quadrants are all leaves
#[cfg(test)]
pub(crate) fn leaves(nw: Value, ne: Value, sw: Value, se: Value) -> Node {
    Node::new_inner(Quad {
        nw: Node::new_leaf(nw),
        ne: Node::new_leaf(ne),
        sw: Node::new_leaf(sw),
        se: Node::new_leaf(se),
    })
}

fn parse_row(line: &str) -> Vec<Value> {
    line.split_ascii_whitespace()
        .map(|v| v.parse().unwrap_or_else(|_| panic!("Invalid value {v:?}")))
        .collect()
}
