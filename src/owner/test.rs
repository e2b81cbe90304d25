/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_fresh_ids_are_distinct() {
    let ids: HashSet<OwnerId> = (0..1_000).map(|_| OwnerId::fresh()).collect();

    assert_eq!(ids.len(), 1_000);
}

#[test]
fn test_fresh_ids_are_distinct_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..250).map(|_| OwnerId::fresh()).collect::<Vec<_>>()))
        .collect();

    let ids: HashSet<OwnerId> =
        handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();

    assert_eq!(ids.len(), 1_000);
}
