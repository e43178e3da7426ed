//! Macros for declaring attempt states.

/// Generate a `State` implementation for a fieldless enum.
///
/// Variants listed under `final:` are terminal for the attempt, variants
/// listed under `error:` mark an answer the question could not grade.
/// Extra derives can be added through ordinary attributes.
///
/// # Example
///
/// ```
/// use guessit::state_enum;
/// use guessit::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum ReviewState {
///         Open,
///         Rejected,
///         Accepted,
///     }
///     final: [Accepted]
///     error: [Rejected]
/// }
///
/// assert!(ReviewState::Accepted.is_final());
/// assert_eq!(ReviewState::Rejected.name(), "Rejected");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
