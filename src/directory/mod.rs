//! Named address books and the queries over them.

mod aggregate;
mod book;

pub use aggregate::AggregateCounts;
pub use book::Directory;
