/// Builds a [`Set`](crate::Set) from a list of elements, collapsing duplicates.
///
/// ```
/// use shared_set::set;
///
/// let s = set!["a", "a", "b"];
/// assert_eq!(s.size(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {
        <$crate::Set<_>>::from_elems([$($elem),+])
    };
}
