/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;
use std::error::Error;

#[test]
fn test_cursor_error_display() {
    assert_eq!(CursorError::End.to_string(), "cursor points past the end of the container");
    assert_eq!(
        CursorError::Stale.to_string(),
        "cursor was invalidated by a structural modification of the container"
    );
}

#[test]
fn test_alloc_error_source() {
    let reserve_error = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
    let error = AllocError::Exhausted { capacity: usize::MAX, source: reserve_error };

    assert!(error.source().is_some());
    assert!(AllocError::CapacityOverflow.source().is_none());
    assert_eq!(AllocError::CapacityOverflow.to_string(), "capacity overflow");
    assert_eq!(
        AllocError::Exhausted {
            capacity: 3,
            source: Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err()
        }
        .to_string(),
        "failed to allocate storage for 3 elements"
    );
}
