//! Cross-crate checks: the engine's output fed through the shared helpers.

#[cfg(test)]
mod properties;
