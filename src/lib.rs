//! Password strength meter
//!
//! Classifies a candidate password into one of four strength tiers by
//! counting how many of five fixed criteria it satisfies:
//!
//! 1. At least 8 characters long
//! 2. At least one uppercase letter (`A`-`Z`)
//! 3. At least one lowercase letter (`a`-`z`)
//! 4. At least one digit (`0`-`9`)
//! 5. At least one character from a fixed special-character set
//!
//! | Satisfied criteria | Tier |
//! |---|---|
//! | 0 or 1 | `weak` |
//! | 2 or 3 | `medium` |
//! | 4 | `strong` |
//! | 5 | `very strong` |
//!
//! The evaluator is total: it accepts any form value, and non-text or
//! empty inputs classify as `weak` instead of failing.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{FieldValue, StrengthTier, evaluate_strength};
//!
//! let value = FieldValue::from("Password1!");
//! assert_eq!(evaluate_strength(&value), StrengthTier::VeryStrong);
//!
//! // Non-text form values never fail; they classify as weak.
//! assert_eq!(evaluate_strength(&FieldValue::Absent), StrengthTier::Weak);
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod types;

// Public API
pub use criteria::{MIN_LENGTH, SPECIAL_CHARS};
pub use evaluator::evaluate_strength;
pub use types::{FieldValue, ParseTierError, SatisfiedCount, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::evaluate_strength_tx;
