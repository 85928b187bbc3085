//! Line-oriented persistence for the asset collection.
//!
//! One UTF-8 text line per asset, comma-separated, no header:
//!
//! ```text
//! Hardware,<id>,<name>,<manufacturer>,<model>,<purchaseDate>,<true|false>,<location>,<maintenanceDate>
//! Software,<id>,<name>,<manufacturer>,<model>,<purchaseDate>,<true|false>,<version>,<licenseKey>
//! ```
//!
//! Loading is lenient: lines with fewer than nine fields or an unknown
//! discriminator are skipped silently rather than failing the whole file.
//!
//! ## Known limitation
//!
//! Field values are written unescaped, so a value containing a literal `,`
//! shifts the row layout on reload. That is a constraint of the wire
//! format itself; fixing it would change the format, so it stays
//! documented instead.

mod load;
mod save;


pub use load::{decode, load_from_file};
pub use save::{encode, save_to_file};
