//! # Modes Subcommand
//!
//! Lists the mode names `check --mode` accepts.

use std::io::Write;

use anyhow::Result;
use licreg_core::Mode;

/// Write each recognised mode name on its own line.
pub fn run_modes(out: &mut impl Write) -> Result<u8> {
    for mode in Mode::all_modes() {
        writeln!(out, "{mode}")?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_modes_in_order() {
        let mut buf = Vec::new();
        assert_eq!(run_modes(&mut buf).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "TRIAL\nFULL\n");
    }
}
