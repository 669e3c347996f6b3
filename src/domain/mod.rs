//! Domain Layer
//!
//! Pure skeleton-generation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (EntryMode, ImportPath, Stage)
//! - `services/` - Pure text transforms (entry template, outlet splicing)
//! - `policies/` - Business rules (PathPolicy)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, Bundler, Renderer, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
