pub mod family;
pub mod token;

// re-export for cleaner imports
pub use self::family::{FamilyId, FamilyKind};
pub use self::token::{TokenClass, TokenClassifier, classify_token, split_family_field};
