//! Declarative helpers shared by the entity modules.

/// Define a closed enumeration carried as a string on the wire.
///
/// Each variant maps to one wire spelling (matched case-insensitively on
/// decode). Unrecognised values decode to the generated `Unknown` variant
/// so a new backend status never fails a whole list; `null` decodes to
/// `Unknown` as well. Parsing user input through `FromStr` stays strict.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this console does not recognise.
            Unknown,
        }

        impl $name {
            /// Every recognised variant, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Return the wire spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown => "UNKNOWN",
                }
            }

            /// Decode a wire value, falling back to `Unknown`.
            pub fn from_wire(value: &str) -> Self {
                let value = value.trim();
                $(
                    if value.eq_ignore_ascii_case($wire) {
                        return Self::$variant;
                    }
                )+
                Self::Unknown
            }

            /// Whether this is a recognised value.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unknown
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::backoffice_core::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match Self::from_wire(s) {
                    Self::Unknown => {
                        let expected: Vec<&str> = Self::KNOWN.iter().map(|v| v.as_str()).collect();
                        Err(::backoffice_core::AppError::validation(format!(
                            "Invalid {}: '{}'. Expected one of: {}",
                            stringify!($name),
                            s,
                            expected.join(", ")
                        )))
                    }
                    known => Ok(known),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <Option<String> as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(raw.as_deref().map(Self::from_wire).unwrap_or_default())
            }
        }
    };
}
