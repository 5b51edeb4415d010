//! Open Packaging Conventions (OPC) support.
//!
//! Provides the package model used to serialize a presentation: partnames
//! (`PackUri`), relationships, parts, content types, and the physical ZIP
//! writer. Only the writing half of OPC is implemented; packages are built
//! in memory and serialized exactly once.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackUri;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
