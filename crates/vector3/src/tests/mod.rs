//! Cross-cutting property checks for `Vector3`
