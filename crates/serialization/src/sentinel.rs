/// Markers for values with no direct native equivalent.
///
/// All four are distinct from each other and from every other
/// [`Value`](crate::Value) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// An array slot that was never assigned.
    Hole,
    /// Explicit `undefined`.
    Undefined,
    /// Explicit `null`.
    Null,
    /// The deserializer had nothing to return, e.g. an unrecognized tag.
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_pairwise_distinct() {
        let all = [
            Sentinel::Hole,
            Sentinel::Undefined,
            Sentinel::Null,
            Sentinel::Nothing,
        ];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }
}
