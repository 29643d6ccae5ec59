//! Macro for the enumerated answer codes.
//!
//! Every select input on the assessment form stores a short numeric code.
//! **`coded_enum!`** generates the enum plus its `code`, `label`,
//! `from_code` and `Display` so each field is declared as a single table:
//!
//! ```ignore
//! coded_enum! {
//!     /// Fasting blood sugar above 120 mg/dl.
//!     FastingBloodSugar, "fastingBloodSugar" {
//!         Normal => ("0", "Less than 120 mg/dl"),
//!         High => ("1", "Greater than 120 mg/dl"),
//!     }
//! }
//! ```

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of the form field holding this code.
            pub const FIELD: &'static str = $field;

            /// The stored code for this option.
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human-readable label for this option.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Decodes a stored code.
            pub fn from_code(code: &str) -> Result<Self, $crate::domain::foundation::ValidationError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err($crate::domain::foundation::ValidationError::invalid_format(
                        $field,
                        format!("unknown code '{}'", other),
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

pub(crate) use coded_enum;
