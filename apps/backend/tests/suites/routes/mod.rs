mod error_shape;
mod health;
mod scenario;
mod state_builder;
