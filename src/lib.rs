//! MPIN strength evaluation library
//!
//! Rates 4 or 6 digit mobile PINs by looking for predictable patterns:
//! keypad traces, numeric progressions, repetition, well-known PINs and
//! encodings of the user's personal dates. Every detected weakness is a
//! [`Finding`] that subtracts points from a base score of 100.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `MPIN_COMMON_PINS_PATH`: Custom path to the common PIN list
//!   (default: `./assets/common-pins.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use mpin_strength::{evaluate_pin_strength, init_common_pins, DateInfo, Demographics};
//! use secrecy::SecretString;
//!
//! // Load the common PIN list (call once at startup)
//! init_common_pins().expect("Failed to load common PIN list");
//!
//! let dates = Demographics::new().with_self_dob(DateInfo::new(27, 2, 2004).unwrap());
//! let pin = SecretString::new("2702".to_string().into());
//!
//! match evaluate_pin_strength(&pin, &dates) {
//!     Ok(evaluation) => {
//!         println!("Score: {}", evaluation.score);
//!         println!("Strength: {}", evaluation.strength());
//!         for reason in evaluation.reasons() {
//!             println!("- {reason}");
//!         }
//!     }
//!     Err(invalid) => println!("{}: {}", invalid.strength(), invalid),
//! }
//! ```

// Internal modules
mod common_pins;
mod dates;
mod evaluator;
mod normalize;
mod scorer;
mod sections;
mod types;

// Public API
pub use common_pins::{
    CommonPinsError, common_pins_len, get_common_pins_path, init_common_pins,
    init_common_pins_from_path, is_common_pin,
};
pub use dates::{DateEncoding, DateError, DateInfo, DateRole, Demographics};
pub use evaluator::evaluate_pin_strength;
pub use normalize::{InvalidInput, PIN_LENGTHS, Pin, normalize};
pub use scorer::{STRONG_THRESHOLD, WEAK_THRESHOLD};
pub use types::{Finding, FindingCategory, KeypadFamily, PinEvaluation, PinScore, PinStrength};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_pin_strength_tx};
