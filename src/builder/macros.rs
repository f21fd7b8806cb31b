//! Macros for declaring flow steps.

/// Generate a `Step` implementation for an enum of unit variants.
///
/// The `inactive:` clause names the sentinel variant. Steps that carry
/// payloads need a hand-written `Step` implementation.
///
/// # Example
///
/// ```
/// use backstack::core::Step;
/// use backstack::step_enum;
///
/// step_enum! {
///     pub enum Onboarding {
///         Welcome,
///         Profile,
///         Done,
///         Inactive,
///     }
///     inactive: Inactive
/// }
///
/// assert_eq!(Onboarding::Profile.name(), "Profile");
/// assert!(Onboarding::Inactive.is_inactive());
/// ```
#[macro_export]
macro_rules! step_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        inactive: $inactive:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Step for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn inactive() -> Self {
                Self::$inactive
            }

            fn is_inactive(&self) -> bool {
                matches!(self, Self::$inactive)
            }
        }
    };
}
