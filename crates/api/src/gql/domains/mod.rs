// Each domain contains: mod.rs, resolvers.rs, types.rs (+ service.rs for workflows)

pub mod rewards;
