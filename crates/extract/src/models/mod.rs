mod kind;
mod name;
mod record;
mod tally;

pub use self::kind::PageKind;
pub use self::name::Name;
pub use self::record::PlayerRecord;
pub use self::tally::Tally;
