/*
 * Responsibility
 * - 永続化の窓口 (KittenRepo trait と実装)
 */
pub mod error;
pub mod kitten_repo;
pub mod memory_kitten_repo;
pub mod pg_kitten_repo;

pub use kitten_repo::KittenRepo;
pub use memory_kitten_repo::MemoryKittenRepo;
pub use pg_kitten_repo::PgKittenRepo;
