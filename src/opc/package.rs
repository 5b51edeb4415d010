/// The in-memory OPC package: parts plus package-level relationships.
///
/// Packages built by this crate are write-only: parts are added in memory
/// and the whole package is serialized once by [`PackageWriter`].
///
/// [`PackageWriter`]: crate::opc::pkgwriter::PackageWriter
use crate::opc::error::{OpcError, Result};
use crate::opc::part::Part;
use crate::opc::packuri::PackUri;
use crate::opc::rel::Relationships;
use std::collections::BTreeMap;

/// Main API class for building OPC packages.
pub struct OpcPackage {
    /// Package-level relationships (serialized to `/_rels/.rels`)
    rels: Relationships,

    /// All parts in the package, indexed by partname.
    /// A BTreeMap keeps the serialization order deterministic.
    parts: BTreeMap<String, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(),
            parts: BTreeMap::new(),
        }
    }

    /// Add a new part to the package, replacing any part with the same name.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        let partname = part.partname().to_string();
        self.parts.insert(partname, part);
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackUri) -> Result<&dyn Part> {
        self.parts
            .get(partname.as_str())
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get an iterator over all parts in the package, ordered by partname.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackUri) -> bool {
        self.parts.contains_key(partname.as_str())
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part.
    ///
    /// Creates or reuses a package-level relationship and returns its rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        let rel = self.rels.get_or_add(reltype, target_ref);
        rel.r_id().to_string()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::part::BlobPart;

    fn blob_part(name: &str) -> Box<dyn Part> {
        Box::new(BlobPart::new(
            PackUri::new(name).unwrap(),
            "application/xml".to_string(),
            b"<x/>".to_vec(),
        ))
    }

    #[test]
    fn test_add_and_get_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(blob_part("/ppt/presentation.xml"));

        assert_eq!(pkg.part_count(), 1);
        let uri = PackUri::new("/ppt/presentation.xml").unwrap();
        assert!(pkg.contains_part(&uri));
        assert_eq!(pkg.get_part(&uri).unwrap().blob(), b"<x/>");
    }

    #[test]
    fn test_missing_part_is_an_error() {
        let pkg = OpcPackage::new();
        let uri = PackUri::new("/ppt/presentation.xml").unwrap();
        assert!(matches!(
            pkg.get_part(&uri),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_iter_parts_ordered_by_name() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(blob_part("/ppt/slides/slide2.xml"));
        pkg.add_part(blob_part("/docProps/core.xml"));
        pkg.add_part(blob_part("/ppt/slides/slide1.xml"));

        let names: Vec<String> = pkg.iter_parts().map(|p| p.partname().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "/docProps/core.xml",
                "/ppt/slides/slide1.xml",
                "/ppt/slides/slide2.xml"
            ]
        );
    }
}
