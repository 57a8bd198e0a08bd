//! Macros for declaring states.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Each variant is named by its identifier. The enum derives `Clone`, `Copy`,
/// `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash` and `Debug`; further
/// attributes such as serde derives can be added in front of it.
///
/// # Example
///
/// ```
/// use fsm_rules::core::State;
/// use fsm_rules::state_enum;
///
/// state_enum! {
///     pub enum TrafficLight {
///         Red,
///         RedAmber,
///         Green,
///         Amber,
///     }
/// }
///
/// assert_eq!(TrafficLight::RedAmber.name(), "RedAmber");
/// assert!(TrafficLight::Red < TrafficLight::Amber);
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed(stringify!($variant))),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_orders_by_declaration() {
        assert!(TestState::Initial < TestState::Processing);
        assert!(TestState::Processing < TestState::Complete);
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            #[derive(serde::Serialize, serde::Deserialize)]
            pub enum PublicState {
                A,
                B,
            }
        }

        let json = serde_json::to_string(&PublicState::B).unwrap();
        assert_eq!(json, "\"B\"");
        assert_eq!(PublicState::A.name(), "A");
    }
}
