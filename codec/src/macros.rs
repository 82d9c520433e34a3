//! Macros that build [`Flex`](crate::Flex) impls for user structs and enums.

/// Defines a struct whose encoding is its fields, in declaration order.
///
/// Generates the struct, a `new` constructor taking every field, a `Default`
/// impl, and a [`Flex`](crate::Flex) impl. Every field type must itself be
/// `Flex`; defaults come from [`Flex::empty`](crate::Flex::empty), so fixed
/// arrays of any length work. Fixed-size arrays are written `[T; N]`,
/// variable-size arrays `Vec<T>`, blobs [`Blob`](crate::Blob).
///
/// ```
/// use codec::{decode_exact, encode_to_vec, flex_struct};
///
/// flex_struct! {
///     #[derive(Debug, Clone, PartialEq, Eq)]
///     pub struct Reading {
///         pub sensor: u16,
///         pub samples: Vec<i32>,
///         pub label: String,
///     }
/// }
///
/// let reading = Reading::new(7, vec![-1, 2], "bay".into());
/// let bytes = encode_to_vec(&reading).unwrap();
/// assert_eq!(decode_exact::<Reading>(&bytes).unwrap(), reading);
/// ```
#[macro_export]
macro_rules! flex_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fvis:vis $fname:ident : $fty:ty
            ),* $(,)?
        }
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fvis $fname : $fty,
            )*
        }

        impl $name {
            /// Creates a new instance from its fields.
            #[allow(clippy::too_many_arguments)]
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $fname: <$fty as $crate::Flex>::empty(), )*
                }
            }
        }

        impl $crate::Flex for $name {
            fn encode(&self, out: &mut $crate::OutBuffer<'_>) -> $crate::BufferResult<()> {
                $( <$fty as $crate::Flex>::encode(&self.$fname, out)?; )*
                ::core::result::Result::Ok(())
            }

            fn decode(inp: &mut $crate::InBuffer<'_>) -> $crate::CodecResult<Self> {
                $( let $fname = <$fty as $crate::Flex>::decode(inp)?; )*
                ::core::result::Result::Ok(Self { $( $fname ),* })
            }

            fn decode_with_limits(
                inp: &mut $crate::InBuffer<'_>,
                limits: &$crate::CodecLimits,
            ) -> $crate::CodecResult<Self> {
                $( let $fname = <$fty as $crate::Flex>::decode_with_limits(inp, limits)?; )*
                ::core::result::Result::Ok(Self { $( $fname ),* })
            }

            fn encoded_len(&self) -> usize {
                0 $( + <$fty as $crate::Flex>::encoded_len(&self.$fname) )*
            }

            fn empty() -> Self {
                <Self as ::core::default::Default>::default()
            }
        }
    };
}

/// Defines a fieldless enum encoded through its underlying integer type.
///
/// The representation must be one of the fixed-width integer types. The first
/// variant is the `Default`. Decoding a value that names no variant fails with
/// [`CodecError::InvalidDiscriminant`](crate::CodecError::InvalidDiscriminant).
///
/// ```
/// use codec::{decode_exact, encode_to_vec, flex_enum, CodecError};
///
/// flex_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Mode: i8 {
///         Idle = 0,
///         Reverse = -1,
///         Forward = 1,
///     }
/// }
///
/// assert_eq!(encode_to_vec(&Mode::Reverse).unwrap(), vec![0x01]);
/// assert_eq!(decode_exact::<Mode>(&[0x02]).unwrap(), Mode::Forward);
/// assert!(matches!(
///     decode_exact::<Mode>(&[0x04]),
///     Err(CodecError::InvalidDiscriminant { value: 2, .. })
/// ));
/// ```
#[macro_export]
macro_rules! flex_enum {
    {
        $( #[ $eattr:meta ] )*
        $v:vis enum $name:ident : $repr:ident {
            $( #[ $first_attr:meta ] )*
            $first:ident = $first_val:expr
            $(
                ,
                $( #[ $vattr:meta ] )*
                $variant:ident = $val:expr
            )* $(,)?
        }
    } => {
        $( #[ $eattr ] )*
        #[repr($repr)]
        $v enum $name {
            $( #[ $first_attr ] )*
            $first = $first_val,
            $(
                $( #[ $vattr ] )*
                $variant = $val,
            )*
        }

        impl $name {
            /// Returns the underlying integer value.
            $v const fn to_repr(&self) -> $repr {
                match self {
                    Self::$first => $first_val,
                    $( Self::$variant => $val, )*
                }
            }

            /// Returns the variant with the given underlying value, if any.
            $v const fn from_repr(value: $repr) -> ::core::option::Option<Self> {
                #[allow(non_upper_case_globals)]
                const $first: $repr = $first_val;
                $(
                    #[allow(non_upper_case_globals)]
                    const $variant: $repr = $val;
                )*
                match value {
                    $first => ::core::option::Option::Some(Self::$first),
                    $( $variant => ::core::option::Option::Some(Self::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl $crate::Flex for $name {
            fn encode(&self, out: &mut $crate::OutBuffer<'_>) -> $crate::BufferResult<()> {
                <$repr as $crate::Flex>::encode(&self.to_repr(), out)
            }

            fn decode(inp: &mut $crate::InBuffer<'_>) -> $crate::CodecResult<Self> {
                let value = <$repr as $crate::Flex>::decode(inp)?;
                Self::from_repr(value).ok_or($crate::CodecError::InvalidDiscriminant {
                    type_name: ::core::stringify!($name),
                    value: ::core::convert::From::from(value),
                })
            }

            fn encoded_len(&self) -> usize {
                <$repr as $crate::Flex>::encoded_len(&self.to_repr())
            }

            fn empty() -> Self {
                Self::$first
            }
        }
    };
}
