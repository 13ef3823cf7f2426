/// Implements [`std::str::FromStr`], [`std::fmt::Display`], [`std::convert::From`] and
/// [`std::convert::Into`] for a newtype that wraps an i64 registry id.
macro_rules! impls_for_i64_newtype {
    ($newtype: ty) => {
        impl std::str::FromStr for $newtype {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.parse()?;

                Ok(Self(s))
            }
        }

        impl std::cmp::PartialEq<i64> for $newtype {
            fn eq(&self, other: &i64) -> bool {
                self.0.eq(other)
            }
        }

        $crate::macros::impl_display!($newtype);
        $crate::macros::impl_from!($newtype; i64);
        $crate::macros::impl_into!($newtype; i64);
    };
}
pub(crate) use impls_for_i64_newtype;

/// Implements [`std::fmt::Display`] for a newtype, assuming that the inner type implements Display.
macro_rules! impl_display {
    ($newtype: ty) => {
        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
pub(crate) use impl_display;

/// Implements [`std::convert::From`]
macro_rules! impl_from {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$inner> for $newtype {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}
pub(crate) use impl_from;

/// Implements [`std::convert::Into`]
macro_rules! impl_into {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$newtype> for $inner {
            fn from(value: $newtype) -> Self {
                value.0.into()
            }
        }
    };
}
pub(crate) use impl_into;
