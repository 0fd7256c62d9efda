//! Impl fan-out for symmetric comparisons against foreign byte types.

/// Generates both `PartialEq` directions for each `(lhs, rhs)` pair, with an
/// optional leading `[generics]` bracket.
macro_rules! symmetric_eq {
    ($( $([$($gen:tt)*])? ($lhs:ty, $rhs:ty); )*) => {
        $(
            impl $(<$($gen)*>)? core::cmp::PartialEq<$rhs> for $lhs {
                #[inline]
                fn eq(&self, other: &$rhs) -> bool {
                    crate::strand::cmp::eq_bytes(self, other)
                }
            }

            impl $(<$($gen)*>)? core::cmp::PartialEq<$lhs> for $rhs {
                #[inline]
                fn eq(&self, other: &$lhs) -> bool {
                    crate::strand::cmp::eq_bytes(self, other)
                }
            }
        )*
    };
}

/// Generates both `PartialOrd` directions for each `(lhs, rhs)` pair.
macro_rules! symmetric_ord {
    ($( $([$($gen:tt)*])? ($lhs:ty, $rhs:ty); )*) => {
        $(
            impl $(<$($gen)*>)? core::cmp::PartialOrd<$rhs> for $lhs {
                #[inline]
                fn partial_cmp(&self, other: &$rhs) -> Option<core::cmp::Ordering> {
                    crate::strand::cmp::cmp_bytes(self, other)
                }
            }

            impl $(<$($gen)*>)? core::cmp::PartialOrd<$lhs> for $rhs {
                #[inline]
                fn partial_cmp(&self, other: &$lhs) -> Option<core::cmp::Ordering> {
                    crate::strand::cmp::cmp_bytes(self, other)
                }
            }
        )*
    };
}

pub(crate) use {symmetric_eq, symmetric_ord};
