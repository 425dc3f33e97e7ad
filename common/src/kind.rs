//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// The enum is spelled `snake_case` on the wire (both [`serde`] and
/// [`FromStr`]/[`Display`]) and carries a human-readable German `text`
/// per variant.
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
///
/// # Example
///
/// ```rust
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube."]
///         #[text = "Würfel"]
///         Cube,
///
///         #[doc = "A sphere."]
///         #[text = "Kugel"]
///         Sphere,
///     }
/// }
///
/// assert_eq!(Kind::Cube.text(), "Würfel");
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                #[text = $text:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(
                $crate::private::serde::Deserialize,
                $crate::private::serde::Serialize,
            ),
            serde(rename_all = "snake_case"),
        )]
        #[doc = $doc]
        #[strum(serialize_all = "snake_case")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }

        impl $name {
            /// Returns the human-readable text of this kind.
            #[must_use]
            pub const fn text(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $text,
                    )*
                }
            }
        }
    };
}
