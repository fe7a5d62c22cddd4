pub mod mongo;
pub mod postgres;
pub mod s3;

pub use mongo::Database;
pub use s3::S3Storage;
