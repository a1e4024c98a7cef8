//! Return-value normalization
//!
//! Every matched method is expected to end its return list with a
//! conventional error slot, which never becomes part of the generated
//! service/client payload. This module drops that slot and gives the
//! remaining unnamed return values synthetic names so templates can refer
//! to them.

use signature::ParamDescriptor;

use crate::{ExtractError, Result};

/// Drop the trailing error slot and name the unnamed survivors.
///
/// The final descriptor is removed unconditionally. A method with an empty
/// return list has no slot to drop and fails with
/// [`ExtractError::MissingErrorSlot`]. Each remaining descriptor whose
/// name trims to empty is assigned `par<i>`, i being its zero-based index
/// in the post-removal sequence. Order is preserved.
pub fn normalize_returns(
    method_name: &str,
    mut retvals: Vec<ParamDescriptor>,
) -> Result<Vec<ParamDescriptor>> {
    if retvals.pop().is_none() {
        return Err(ExtractError::MissingErrorSlot { method: method_name.to_string() });
    }

    for (i, pd) in retvals.iter_mut().enumerate() {
        if pd.name.trim().is_empty() {
            pd.name = format!("par{}", i);
        }
    }

    Ok(retvals)
}
