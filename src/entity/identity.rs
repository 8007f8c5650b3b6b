use std::fmt;

use serde::{Deserialize, Serialize};

use super::Entity;

macro_rules! identity_entity {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $ty {
            /// Unique id
            pub id: i32,
            /// Display name
            pub name: String,
        }

        impl $ty {
            /// Create an entity with an explicit name
            pub fn new(id: i32, name: impl Into<String>) -> Self {
                Self {
                    id,
                    name: name.into(),
                }
            }

            /// Create an entity named after its id
            pub fn with_id(id: i32) -> Self {
                Self::new(id, id.to_string())
            }
        }

        impl Entity for $ty {
            fn id(&self) -> i32 {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {} ({})", stringify!($ty), self.id, self.name)
            }
        }
    };
}

identity_entity! {
    /// Acquisition channel of a view setup
    Channel
}

identity_entity! {
    /// Acquisition angle of a view setup
    Angle
}

identity_entity! {
    /// Illumination direction of a view setup
    Illumination
}
