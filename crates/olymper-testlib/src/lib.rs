pub mod random;
pub mod stream;
pub mod text;
pub mod verdict;

pub use random::Random;
pub use stream::{InStream, Mode, Position, StreamError};
pub use verdict::{Outcome, Verdict};
