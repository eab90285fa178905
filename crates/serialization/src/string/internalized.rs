use super::{DirectStringTable, StringEncoding, StringLocation, StringTable};
use crate::{StringTableError, Value};

/// Location-aware table layered over [`DirectStringTable`].
///
/// Content strings (top level, set items, error text, regexp sources) are
/// decoded directly. Key and value positions inside objects, arrays and
/// maps currently resolve to an empty placeholder; those branches are the
/// slots for an intern cache keyed by `(bytes, encoding)`.
#[derive(Debug, Default)]
pub struct InternalizedStringTable {
    direct: DirectStringTable,
    released: bool,
}

impl InternalizedStringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl StringTable for InternalizedStringTable {
    fn lookup(
        &mut self,
        bytes: &[u8],
        encoding: StringEncoding,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, StringTableError> {
        match location {
            // TODO: intern keys once the cache semantics are confirmed.
            StringLocation::ObjectKey
            | StringLocation::DenseArrayKey
            | StringLocation::SparseArrayKey
            | StringLocation::MapKey => Ok(String::new()),
            StringLocation::ObjectValue
            | StringLocation::DenseArrayItem
            | StringLocation::SparseArrayItem
            | StringLocation::MapValue => Ok(String::new()),
            StringLocation::ErrorMessage
            | StringLocation::ErrorStack
            | StringLocation::Regexp
            | StringLocation::SetItem
            | StringLocation::TopLevel => {
                self.direct.lookup(bytes, encoding, location, related_key)
            }
            StringLocation::Void => Ok(String::new()),
        }
    }

    fn release(&mut self) {
        self.direct.release();
        self.released = true;
    }
}
