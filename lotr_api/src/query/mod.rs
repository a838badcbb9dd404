mod common;
pub use self::common::Query;

mod pagination;
pub use self::pagination::Pagination;
