/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::TryReserveError;
use std::fmt::{self, Display};

/// Error returned when a cursor cannot be used against its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor is the one-past-the-end sentinel and does not point at an element.
    End,
    /// The container was structurally modified after the cursor was created.
    Stale,
}

impl Display for CursorError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::End => fmt.write_str("cursor points past the end of the container"),
            CursorError::Stale => {
                fmt.write_str("cursor was invalidated by a structural modification of the container")
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// Error returned when a container fails to grow its storage.
///
/// The container is left exactly as it was before the failed growth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity does not fit in a `usize`.
    CapacityOverflow,
    /// The allocator could not provide storage for `capacity` elements.
    Exhausted { capacity: usize, source: TryReserveError },
}

impl Display for AllocError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow => fmt.write_str("capacity overflow"),
            AllocError::Exhausted { capacity, .. } => {
                write!(fmt, "failed to allocate storage for {capacity} elements")
            }
        }
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocError::CapacityOverflow => None,
            AllocError::Exhausted { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod test;
