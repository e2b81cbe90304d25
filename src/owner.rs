/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Identity of a container instance.  Cursors record the owner they came from so a container can
/// reject cursors handed out by another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct OwnerId(u64);

impl OwnerId {
    /// Returns an id no other container in this process has been given.
    pub(crate) fn fresh() -> OwnerId {
        OwnerId(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod test;
