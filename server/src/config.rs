use std::env;

/// Returns the value of the named environment variable, or the default
/// when it is unset. Every knob in this service has a sensible default.
pub fn get_variable_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}
