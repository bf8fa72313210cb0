//! Structural nesting depth of values.

use crate::value::Value;

/// Recursively determines the dimensionality of a value.
///
/// - `0`: not a container (numbers, strings, opaque objects)
/// - `1`: a flat container, or any empty container
/// - `N`: `1 + ` the deepest element
///
/// Arrays and columns are materialized to plain nested lists once before
/// recursing, so an array's count equals its number of axes.
///
/// # Example
///
/// ```rust
/// use valkit_core::{dimensional_count, Value};
///
/// assert_eq!(dimensional_count(&Value::from(1)), 0);
/// assert_eq!(dimensional_count(&Value::from("a")), 0);
/// assert_eq!(dimensional_count(&Value::from(vec![1, 2, 3])), 1);
/// assert_eq!(dimensional_count(&Value::from(vec![vec![1, 2], vec![3, 4]])), 2);
/// ```
pub fn dimensional_count(value: &Value) -> usize {
    match value.materialize() {
        Some(items) => items.iter().map(dimensional_count).max().map_or(1, |d| d + 1),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::LibScalar;
    use crate::value::{NdArray, Series};

    fn array(shape: Vec<usize>) -> Value {
        let size: usize = shape.iter().product();
        let data = (0..size).map(|i| LibScalar::Int64(i as i64)).collect();
        Value::from(NdArray::new(shape, data).unwrap())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dimensional_count(&Value::from(1)), 0);
        assert_eq!(dimensional_count(&Value::from(0.5)), 0);
        assert_eq!(dimensional_count(&Value::from("list[0, 0]")), 0);
        assert_eq!(dimensional_count(&Value::Opaque("datetime".into())), 0);
        assert_eq!(dimensional_count(&Value::Null), 0);
        assert_eq!(dimensional_count(&Value::Lib(LibScalar::Int8(1))), 0);
    }

    #[test]
    fn test_nested_lists() {
        assert_eq!(dimensional_count(&Value::from(vec![0, 1, 2])), 1);
        assert_eq!(dimensional_count(&Value::from(vec![vec![0, 1], vec![2, 3]])), 2);
        let cube = Value::from(vec![
            vec![vec![0], vec![1]],
            vec![vec![2], vec![3]],
        ]);
        assert_eq!(dimensional_count(&cube), 3);
    }

    #[test]
    fn test_empty_is_one() {
        assert_eq!(dimensional_count(&Value::List(vec![])), 1);
        assert_eq!(dimensional_count(&Value::Tuple(vec![])), 1);
        assert_eq!(dimensional_count(&Value::from(Series::default())), 1);
        assert_eq!(dimensional_count(&Value::from(vec![Value::List(vec![])])), 2);
    }

    #[test]
    fn test_ragged_takes_deepest() {
        let ragged = Value::List(vec![
            Value::Int(1),
            Value::from(vec![vec![1]]),
            Value::from("deep"),
        ]);
        assert_eq!(dimensional_count(&ragged), 3);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(dimensional_count(&array(vec![3])), 1);
        assert_eq!(dimensional_count(&array(vec![2, 2])), 2);
        assert_eq!(dimensional_count(&array(vec![2, 2, 1])), 3);
        assert_eq!(dimensional_count(&array(vec![0])), 1);
        assert_eq!(dimensional_count(&array(vec![2, 0])), 2);
    }

    #[test]
    fn test_series() {
        let s = Series::new(vec![1i64, 2, 3]).with_name("col");
        assert_eq!(dimensional_count(&Value::from(s)), 1);
    }
}
