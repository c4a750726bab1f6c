// Each domain contains: mod.rs, resolvers.rs, service.rs, types.rs

pub mod events;
pub mod organisers;
