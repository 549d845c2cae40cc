pub mod config;
pub mod error;
pub mod info;
pub mod lang;
pub mod lookup;
pub mod normalize;
pub mod query;
pub mod raw;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::info::*;
    pub use crate::lookup::vgmdb::VgmdbSource;
    pub use crate::lookup::{AlbumQuery, MetadataSource};
}
