//! Pathogen reference catalog.
//!
//! The catalog maps a pathogen key (e.g. `SARS-CoV-2`) to one reference
//! sequence. An embedded catalog is compiled into the binary, but custom
//! catalogs can also be loaded from JSON or FASTA files.
//!
//! ## Embedded Catalog
//!
//! - **SARS-CoV-2**: Wuhan-Hu-1 5' UTR fragment (first entry, the fallback)
//! - **Influenza**: A/PR/8/34 hemagglutinin fragment
//! - **MRSA**: mecA fragment
//!
//! ## Example
//!
//! ```rust
//! use pathoscan::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::load_embedded().unwrap();
//!
//! for reference in catalog.iter() {
//!     println!("{}: {} bp", reference.name, reference.length());
//! }
//!
//! // Unknown keys resolve to the first reference
//! let reference = catalog.resolve("unknown-pathogen");
//! assert_eq!(reference.name, "SARS-CoV-2");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use pathoscan::ReferenceCatalog;
//! use std::path::Path;
//!
//! // JSON with the same shape as the embedded catalog
//! let custom = ReferenceCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//!
//! // Or a FASTA file, one record per pathogen
//! let custom = ReferenceCatalog::load_from_file(Path::new("pathogens.fa")).unwrap();
//! ```

pub mod store;
