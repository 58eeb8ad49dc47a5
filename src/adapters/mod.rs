// Adapters layer: concrete implementations of the domain ports. Currently
// only the fake pricing backend; a real HTTP client would live here too.

pub mod fake_api;
