// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

/// Generate a sequence of `count` elements from their index.
///
/// The factory is invoked in ascending order of the index.
pub fn generate<T>(count: usize, factory: impl FnMut(usize) -> T) -> Vec<T> {
    (0..count).map(factory).collect()
}

/// Fallible variant of [`generate()`].
///
/// Stops at and returns the first error.
pub fn try_generate<T, E>(
    count: usize,
    factory: impl FnMut(usize) -> Result<T, E>,
) -> Result<Vec<T>, E> {
    (0..count).map(factory).collect()
}

#[cfg(test)]
mod tests {
    use super::{generate, try_generate};

    #[test]
    fn generate_in_index_order() {
        assert_eq!(vec![0, 10, 20, 30], generate(4, |index| index * 10));
        assert!(generate(0, |index| index).is_empty());
    }

    #[test]
    fn generate_invokes_factory_once_per_index() {
        let mut invocations = Vec::new();
        let generated = generate(3, |index| {
            invocations.push(index);
            index.to_string()
        });
        assert_eq!(vec!["0", "1", "2"], generated);
        assert_eq!(vec![0, 1, 2], invocations);
    }

    #[test]
    fn try_generate_stops_at_first_error() {
        let mut invocations = 0;
        let result = try_generate(5, |index| {
            invocations += 1;
            if index == 2 {
                Err(index)
            } else {
                Ok(index)
            }
        });
        assert_eq!(Err(2), result);
        assert_eq!(3, invocations);
    }
}
