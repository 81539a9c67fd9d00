//! Macros for ergonomic identifier declaration.

/// Declare a fieldless identifier enum usable as an axis.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and serde's traits, and gains:
/// - `ALL`: every variant in declaration order, ready to be passed as an axis
/// - `name()`: the variant name for display
///
/// # Example
///
/// ```
/// use stm_table::id_enum;
///
/// id_enum! {
///     pub enum Door {
///         Closed,
///         Open,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::ALL, &[Door::Closed, Door::Open, Door::Locked]);
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! id_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
