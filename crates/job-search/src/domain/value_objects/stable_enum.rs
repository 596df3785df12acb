// crates/job-search/src/domain/value_objects/stable_enum.rs

/// Enum métier sérialisée par sa valeur texte stable (jamais par ordinal) :
/// l'index reste valide si l'ordre des variantes change.
macro_rules! stable_enum {
    (
        $(#[$meta:meta])*
        $name:ident (field = $field:literal) {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = shared_kernel::errors::DomainError;

            /// Tolère la casse et les séparateurs ("full-time", "Full Time" -> FULL_TIME)
            fn from_str(s: &str) -> shared_kernel::errors::Result<Self> {
                let key = s.trim().to_uppercase().replace(['-', ' '], "_");
                match key.as_str() {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(shared_kernel::errors::DomainError::validation(
                        $field,
                        format!("Unknown {} value: '{}'", $field, s),
                    )),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
