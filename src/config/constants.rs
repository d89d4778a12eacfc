//! Configuration constants.
//!
//! This module defines the fixed values used throughout the application: the
//! nameserver every query is sent to, resolver timeouts, and the naming of
//! input and output files.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Nameserver used for every query.
///
/// Not configurable from the command line; change it here and rebuild.
pub const NAMESERVER: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(113, 55, 13, 51)), 53);

/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Input file used when `--input` is not given.
pub const DEFAULT_INPUT_FILE: &str = "DNS解析.txt";

/// Appended to the input file stem to build the default output file name.
pub const OUTPUT_SUFFIX: &str = "-result";
/// Extension of the output workbook.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Name of the single worksheet in the output workbook.
pub const SHEET_NAME: &str = "Sheet1";

/// Header of the domain column. Record columns follow in `RecordKind::ALL` order.
pub const DOMAIN_COLUMN: &str = "domain";

/// Separator placed between multiple values of one record type in a cell.
pub const DEFAULT_SEPARATOR: &str = ", ";
