//! SPICE netlist model for the ngspice binding.
//!
//! A [`Netlist`] is an ordered list of trimmed, non-empty lines whose first
//! line is the title. Construction checks every line after the title:
//! outside a `.control` / `.endc` block each line must be a component
//! instance, a comment or continuation (`*`, `+`), or a recognized
//! dot-command.
//!
//! # Example
//!
//! ```
//! use ngshared_netlist::{Netlist, NetlistSource};
//!
//! let netlist = Netlist::new(NetlistSource::Text(
//!     "Voltage Divider\nV1 1 0 DC 10\nR1 1 2 1k\nR2 2 0 1k\n.op\n.end\n".to_string(),
//! ))
//! .unwrap();
//!
//! assert_eq!(netlist.title(), "Voltage Divider");
//! assert_eq!(netlist.len(), 6);
//! ```

pub mod error;
pub mod netlist;
pub mod source;
pub mod validate;

pub use error::{Error, Result, SyntaxIssue};
pub use netlist::Netlist;
pub use source::NetlistSource;
pub use validate::{DOT_COMMANDS, validate_lines};
