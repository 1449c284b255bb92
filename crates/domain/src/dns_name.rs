use crate::errors::{DomainError, WireError};
use std::fmt;
use std::str::FromStr;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered list of raw labels.
///
/// Label bytes are kept exactly as they appeared on the wire; equality is
/// byte-exact so a decoded name re-encodes to the same bytes. Use
/// [`DomainName::eq_ignore_case`] for protocol-level comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Box<[u8]>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Result<Self, WireError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut name = Self::root();
        for label in labels {
            name.push_label(label.as_ref())?;
        }
        Ok(name)
    }

    /// Appends a label at the end (towards the root).
    pub fn push_label(&mut self, label: &[u8]) -> Result<(), WireError> {
        if label.is_empty() {
            return Err(WireError::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong(label.len()));
        }
        let new_len = self.encoded_len() + 1 + label.len();
        if new_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong(new_len));
        }
        self.labels.push(label.into());
        Ok(())
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(|l| &l[..])
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the uncompressed wire form, terminating zero included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    /// The name formed by dropping the first `skip` labels.
    pub fn suffix(&self, skip: usize) -> DomainName {
        Self {
            labels: self.labels.iter().skip(skip).cloned().collect(),
        }
    }

    pub fn eq_ignore_case(&self, other: &DomainName) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(other.labels.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    /// Parses dotted text. A single trailing dot is accepted and `"."` is the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(s.to_string()));
        }
        let mut name = Self::root();
        for label in trimmed.split('.') {
            match name.push_label(label.as_bytes()) {
                Ok(()) => {}
                Err(WireError::EmptyLabel) => {
                    return Err(DomainError::InvalidDomainName(s.to_string()))
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(name)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for &b in label.iter() {
                match b {
                    b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                    0x21..=0x7e => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
        }
        Ok(())
    }
}
