use std::fmt;

const BYTES_PER_LINE: usize = 16;

/// Canonical hex dump of a datagram for trace logging.
///
/// Each line is an 8-digit hex offset, sixteen hex bytes split in two
/// groups of eight, and a `|...|` gutter showing printable ASCII.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, chunk) in self.0.chunks(BYTES_PER_LINE).enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{:08x} ", line * BYTES_PER_LINE)?;

            for i in 0..BYTES_PER_LINE {
                if i == BYTES_PER_LINE / 2 {
                    f.write_str(" ")?;
                }
                match chunk.get(i) {
                    Some(b) => write!(f, " {:02x}", b)?,
                    None => f.write_str("   ")?,
                }
            }

            f.write_str("  |")?;
            for &b in chunk {
                let c = if (0x20..0x7f).contains(&b) { b as char } else { '.' };
                write!(f, "{}", c)?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}
