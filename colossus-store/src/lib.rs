pub mod app_config;
pub mod codec;
pub mod file_repo;
pub mod memory_repo;

pub use file_repo::FileRepository;
pub use memory_repo::MemoryRepository;
