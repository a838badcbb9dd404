mod envelope;
pub use self::envelope::Envelope;

mod movie;
pub use self::movie::{Movie, MovieID};

mod quote;
pub use self::quote::Quote;
