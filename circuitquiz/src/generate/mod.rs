//! Randomized circuit values for question templates.
//!
//! Every generator takes the random source explicitly so a question can be
//! reproduced from a seed:
//!
//! ```
//! use circuitquiz::generate::{gen_resistor, gen_watt};
//! use circuitquiz::units::ESeries;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2023);
//! let r = gen_resistor(&mut rng, 1000.0, 7000.0, ESeries::E6)?;
//! let op = gen_watt(&mut rng, r, 0.25)?;
//! assert!(op.power < 0.25);
//! # Ok::<(), circuitquiz::QuizError>(())
//! ```

pub mod power;
pub mod values;

pub use power::{gen_watt, PowerTriple, DEFAULT_POWER_LIMIT, MIN_POWER};
pub use values::{gen_num, gen_num_with_unit, gen_resistor};
