pub mod resolvers;
pub mod time;
