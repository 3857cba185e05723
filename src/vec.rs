//! Element conversion for sequences.
//!
//! This module corresponds to [`mod@std::vec`].

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Converts every element of a sequence with `f`, preserving length and
/// order.
///
/// Position `i` of the output holds `f` applied to position `i` of the
/// input, and `f` runs exactly once per element, in input order. Output
/// capacity is reserved up front from the iterator's size hint (exact for
/// `Vec`, arrays, and slices). An empty input yields an empty `Vec`, never
/// anything "null-ish."
///
/// Conversion is shallow: `f` decides how deep to go.
///
/// # Examples
///
/// ```
/// let doubled = reshape::convert([1, 2, 3], |x| x * 2);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
///
/// Any [`IntoIterator`] feeds in, including adaptor chains:
///
/// ```
/// let lens = reshape::convert("to each his own".split(' '), str::len);
/// assert_eq!(lens, [2, 4, 3, 3]);
/// ```
#[inline]
pub fn convert<I, O, F>(input: impl IntoIterator<Item = I>, f: F) -> Vec<O>
where
    F: FnMut(I) -> O,
{
    input.into_iter().map(f).collect()
}

/// Lifts an element converter into a sequence converter.
///
/// Each wrapping handles one level of nesting: wrap once to convert
/// `Vec<I>`, twice for `Vec<Vec<I>>`, and so on. The closure's parameter
/// type usually needs an explicit annotation here.
///
/// # Examples
///
/// ```
/// let matrix = vec![vec![1, 2], vec![3]];
///
/// let doubled = reshape::convert(matrix, reshape::converter(|x: i32| x * 2));
/// assert_eq!(doubled, [vec![2, 4], vec![6]]);
/// ```
#[inline]
pub fn converter<I, O, F>(mut f: F) -> impl FnMut(Vec<I>) -> Vec<O>
where
    F: FnMut(I) -> O,
{
    move |input| convert(input, &mut f)
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::convert::identity;
    use crate::vec::{convert, converter};

    proptest! {
        #[test]
        fn length_and_positions(nums in propvec(any::<i32>(), ..20)) {
            length_and_positions_impl(nums)?;
        }
    }

    fn length_and_positions_impl(nums: Vec<i32>) -> TestCaseResult {
        let converted = convert(nums.clone(), |x| i64::from(x) * 3);

        prop_assert_eq!(converted.len(), nums.len());
        for (num, out) in nums.iter().zip(&converted) {
            prop_assert_eq!(*out, i64::from(*num) * 3);
        }

        Ok(())
    }

    proptest! {
        #[test]
        fn identity_round_trip(nums in propvec(any::<i32>(), ..20)) {
            prop_assert_eq!(convert(nums.clone(), identity), nums);
        }
    }

    proptest! {
        #[test]
        fn nested_converter(matrix in propvec(propvec(any::<i32>(), ..5), ..5)) {
            nested_converter_impl(matrix)?;
        }
    }

    fn nested_converter_impl(matrix: Vec<Vec<i32>>) -> TestCaseResult {
        let expected: Vec<Vec<i64>> = matrix
            .iter()
            .map(|row| row.iter().map(|&x| i64::from(x) + 1).collect())
            .collect();

        prop_assert_eq!(
            convert(matrix, converter(|x: i32| i64::from(x) + 1)),
            expected
        );

        Ok(())
    }
}
