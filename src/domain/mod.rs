// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define the core
// concepts of the system.
//
// Rules for this layer:
//   - NO file I/O
//   - NO numeric fitting code
//   - Only data shapes and the traits other layers implement
//
// Nothing here knows where models are stored or how they are
// fitted.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The JSON request / response envelope of the scoring boundary
pub mod payload;

// Core abstractions (traits) that other layers implement
pub mod traits;
