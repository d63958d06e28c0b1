use std::fmt;

/// Renders `values` space-separated on a single line, without a trailing
/// newline.
///
/// # Example
///
/// ```rust,ignore
/// use vecmat::utils::format_vector;
///
/// assert_eq!(format_vector(&[4.0, 6.0]), "4 6");
/// ```
pub fn format_vector<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes `values` to stdout on one line.
pub fn print_vector<T: fmt::Display>(values: &[T]) {
    println!("{}", format_vector(values));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&[4.0, 6.0, 0.5]), "4 6 0.5");
    }

    #[test]
    fn test_format_vector_empty() {
        assert_eq!(format_vector::<f64>(&[]), "");
    }
}
