pub mod http_provider;
pub mod in_memory_provider;
