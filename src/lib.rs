pub mod components;
pub mod contracts;
pub mod foundation;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod widgets;

pub use provider::CalmProvider;

#[cfg(test)]
mod test_public_api;
