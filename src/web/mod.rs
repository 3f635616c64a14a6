//! HTTP API for scanning FASTA uploads.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! pathoscan serve
//!
//! # Custom port, custom reference catalog
//! pathoscan serve --port 3000 --references pathogens.fa
//!
//! # Bind to all interfaces
//! pathoscan serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/upload-fasta` - Scan FASTA text (JSON body) for mutations
//! - `GET /api/references` - List all references in the catalog

pub mod server;
