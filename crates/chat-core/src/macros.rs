//! Declarative helpers shared by the domain enums

/// Generate a tolerant integer-backed enum
///
/// The platform adds enum values without notice, so every generated enum has
/// an `Unknown(i64)` variant that keeps the raw ordinal instead of failing.
/// Each known variant carries its wire value and its snake_case name.
///
/// ```ignore
/// int_enum! {
///     /// Channel kinds
///     pub enum ChannelType {
///         Text = 0 => "text",
///         Voice = 2 => "voice",
///     }
/// }
/// ```
#[macro_export]
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this build does not know about
            Unknown(i64),
        }

        impl $name {
            /// Every known variant, in declaration order
            pub const KNOWN: &'static [$name] = &[$( $name::$variant ),+];

            /// Map a wire ordinal, degrading to `Unknown` for unrecognised values
            pub const fn from_value(value: i64) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }

            /// The wire ordinal
            pub const fn value(self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(other) => other,
                }
            }

            /// snake_case name; unknown values render as `unknown_<n>`
            pub fn name(self) -> ::std::borrow::Cow<'static, str> {
                match self {
                    $( Self::$variant => ::std::borrow::Cow::Borrowed($wire), )+
                    Self::Unknown(other) => ::std::borrow::Cow::Owned(format!("unknown_{other}")),
                }
            }

            pub const fn is_unknown(self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            /// Read an ordinal out of a JSON number or numeric string
            pub fn from_json(value: &$crate::__private::Value) -> Option<Self> {
                match value {
                    $crate::__private::Value::Number(n) => n.as_i64().map(Self::from_value),
                    $crate::__private::Value::String(s) => {
                        s.trim().parse::<i64>().ok().map(Self::from_value)
                    }
                    _ => None,
                }
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self::from_value(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.value()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.name())
            }
        }
    };
}
